//! Chat runtime integration.
//!
//! Bridges the sync event loop with the async chat backend. Requests are
//! spawned onto an owned tokio runtime; replies come back over a channel that
//! the loop drains with [`ChatRuntime::try_recv`] once per tick.

use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::client::ChatBackend;
use crate::error::ChatError;
use crate::session::PendingRequest;

/// Reply delivered to the event loop.
#[derive(Debug)]
pub struct ChatReplyEvent {
    pub id: u64,
    pub result: Result<String, ChatError>,
}

pub struct ChatRuntime {
    rt: Runtime,
    backend: Arc<dyn ChatBackend>,
    reply_tx: mpsc::UnboundedSender<ChatReplyEvent>,
    reply_rx: mpsc::UnboundedReceiver<ChatReplyEvent>,
}

impl ChatRuntime {
    pub fn start(backend: Arc<dyn ChatBackend>) -> Result<Self, ChatError> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| ChatError::Runtime(e.to_string()))?;
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Ok(Self {
            rt,
            backend,
            reply_tx,
            reply_rx,
        })
    }

    /// Deliver a request in the background.
    pub fn dispatch(&self, request: PendingRequest) {
        let backend = Arc::clone(&self.backend);
        let tx = self.reply_tx.clone();
        self.rt.spawn(async move {
            let result = backend.send(&request.prompt).await;
            let _ = tx.send(ChatReplyEvent {
                id: request.id,
                result,
            });
        });
    }

    pub fn try_recv(&mut self) -> Option<ChatReplyEvent> {
        self.reply_rx.try_recv().ok()
    }
}
