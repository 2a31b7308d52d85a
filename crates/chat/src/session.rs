//! Conversation state for the chat overlay.
//!
//! Only one request may be outstanding. Replies carry the id of the request
//! they answer, and anything that does not match the pending id is dropped, so
//! out-of-order replies cannot interleave with the conversation.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::error::ChatError;

/// Shown in place of a reply whenever the chat call fails.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting right now. Please try again later.";

/// Suggestions offered before the first message, selectable by number.
pub const STARTER_PROMPTS: [&str; 4] = [
    "Describe a challenging software project you worked on and what your role was.",
    "What excites you about software engineering, and where do you see yourself in this field in the future?",
    "Can you explain a complex AI concept (like neural networks or RAG) in simple terms?",
    "Describe a time you had to optimize code or a system for better performance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub ts_ms: u64,
}

/// A prompt accepted for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft: String,
    pending: Option<u64>,
    next_id: u64,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn push_char(&mut self, ch: char) {
        self.draft.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Waiting on a reply.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the draft. The draft is kept when the submission is refused.
    pub fn submit_draft(&mut self) -> Option<PendingRequest> {
        let text = self.draft.clone();
        let request = self.submit(&text)?;
        self.draft.clear();
        Some(request)
    }

    /// Record a user prompt and hand back the request to deliver.
    ///
    /// Blank prompts and prompts sent while a reply is pending are refused.
    pub fn submit(&mut self, text: &str) -> Option<PendingRequest> {
        if text.trim().is_empty() {
            return None;
        }
        if self.is_thinking() {
            debug!("chat reply pending; refusing new prompt");
            return None;
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            content: text.to_string(),
            ts_ms: now_ms(),
        });
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);
        Some(PendingRequest {
            id,
            prompt: text.to_string(),
        })
    }

    /// Conversation has not started; starter prompts are on offer.
    pub fn is_fresh(&self) -> bool {
        self.messages.is_empty() && self.pending.is_none()
    }

    /// Submit starter prompt `index` (zero-based). Only valid on a fresh session.
    pub fn submit_starter(&mut self, index: usize) -> Option<PendingRequest> {
        if !self.is_fresh() {
            return None;
        }
        let prompt = STARTER_PROMPTS.get(index)?;
        self.submit(prompt)
    }

    /// Apply the outcome of request `id`. Returns false for stale replies.
    pub fn resolve(&mut self, id: u64, result: Result<String, ChatError>) -> bool {
        if self.pending != Some(id) {
            debug!(id, "dropping stale chat reply");
            return false;
        }
        self.pending = None;

        let content = match result {
            Ok(reply) => {
                info!(id, chars = reply.len(), "chat reply received");
                reply
            }
            Err(err) => {
                warn!(id, error = %err, "chat request failed");
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content,
            ts_ms: now_ms(),
        });
        true
    }
}
