use thiserror::Error;

/// Failure of the remote chat collaborator.
///
/// None of these reach the view: the session turns every error into the
/// fallback assistant reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat service returned HTTP {0}")]
    Status(u16),

    #[error("chat reply could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("chat runtime unavailable: {0}")]
    Runtime(String),

    #[error("chat runtime closed")]
    Closed,
}
