//! Chat collaborator - forwards prompts to a remote chat completion endpoint
//!
//! The viewer treats the remote service as an opaque `prompt -> reply`
//! function behind the [`ChatBackend`] trait. [`HttpChatClient`] is the real
//! implementation.
//!
//! # Flow
//!
//! 1. [`ChatSession::submit`] records the user prompt and returns a
//!    [`PendingRequest`] (or refuses it while a reply is pending)
//! 2. [`ChatRuntime::dispatch`] runs the request on a background tokio runtime
//! 3. The event loop polls [`ChatRuntime::try_recv`] each tick
//! 4. [`ChatSession::resolve`] appends the reply, or [`FALLBACK_REPLY`] on any failure
//!
//! # Wire Format
//!
//! ```text
//! POST /chat  {"message":"What stack do you use?"}
//! 200 OK      {"text":"Mostly Rust and TypeScript..."}
//! ```

pub mod client;
pub mod error;
pub mod runtime;
pub mod session;

pub use client::{ChatBackend, ChatClientConfig, HttpChatClient, DEFAULT_CHAT_URL, DEFAULT_TIMEOUT_MS};
pub use error::ChatError;
pub use runtime::{ChatReplyEvent, ChatRuntime};
pub use session::{
    ChatMessage, ChatSession, PendingRequest, Role, FALLBACK_REPLY, STARTER_PROMPTS,
};
