//! HTTP chat client.
//!
//! Wire format: `POST <url>` with `{"message": "<prompt>"}`, answered by
//! `{"text": "<reply>"}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChatError;

pub const DEFAULT_CHAT_URL: &str = "https://portfolio-back-b5c2475174bf.herokuapp.com/chat";
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Opaque `prompt -> reply` collaborator.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, prompt: &str) -> Result<String, ChatError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatClientConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ChatClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CHAT_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    text: String,
}

#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: Client,
    url: String,
}

impl HttpChatClient {
    pub fn new(config: ChatClientConfig) -> Result<Self, ChatError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(&self, prompt: &str) -> Result<String, ChatError> {
        debug!(url = %self.url, chars = prompt.len(), "sending chat prompt");
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest { message: prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let reply: ChatReply = serde_json::from_str(&body)?;
        Ok(reply.text)
    }
}
