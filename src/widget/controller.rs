//! Chat widget controller — the conversation state machine.
//!
//! DESIGN
//! ======
//! One `ChatWidget` owns one `ConversationState` behind a mutex. The
//! lock is never held across the network await: `submit` appends the
//! user turn and raises the awaiting flag, releases the lock, performs
//! the request, then re-acquires to append the assistant turn and drop
//! the flag. A `watch` channel carries a revision counter so any view
//! layer can re-read the snapshot on change without the controller
//! knowing how rendering works.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use super::backend::ChatBackend;
use super::message::Message;
use super::state::ConversationState;

/// Substituted for the assistant's turn whenever the backend call fails
/// in any way. The exchange still completes; the turn is never dropped.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting to the backend. Make sure the server is running.";

pub struct ChatWidget {
    backend: Arc<dyn ChatBackend>,
    state: Mutex<ConversationState>,
    revision: watch::Sender<u64>,
}

impl ChatWidget {
    /// Fresh widget instance: seeded greeting, empty input, idle.
    #[must_use]
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        let (revision, _) = watch::channel(0);
        Self { backend, state: Mutex::new(ConversationState::new()), revision }
    }

    /// Cloned snapshot of the current conversation state.
    pub async fn snapshot(&self) -> ConversationState {
        self.state.lock().await.clone()
    }

    /// Change notifications. The value is a revision counter; re-read
    /// the snapshot whenever it moves.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Unconditionally replace the composed input. Validation happens
    /// at `submit`.
    pub async fn set_pending_input(&self, text: impl Into<String>) {
        self.state.lock().await.pending_input = text.into();
        self.notify();
    }

    /// Submit the pending input as a user turn and resolve one exchange.
    ///
    /// No-op when the trimmed input is empty or another exchange is in
    /// flight. Exactly one backend request per accepted submission; on
    /// any failure the assistant turn becomes [`FALLBACK_REPLY`]. The
    /// awaiting flag is released on every path.
    pub async fn submit(&self) {
        let text = {
            let mut state = self.state.lock().await;
            if state.is_awaiting_reply {
                return;
            }
            let trimmed = state.pending_input.trim();
            if trimmed.is_empty() {
                return;
            }
            let text = trimmed.to_owned();
            state.history.push(Message::user(text.clone()));
            state.pending_input.clear();
            state.is_awaiting_reply = true;
            text
        };
        self.notify();

        let reply = match self.backend.send(&text).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "assistant reply received");
                reply
            }
            Err(e) => {
                warn!(error = %e, "chat backend request failed");
                FALLBACK_REPLY.to_owned()
            }
        };

        {
            let mut state = self.state.lock().await;
            state.history.push(Message::assistant(reply));
            state.is_awaiting_reply = false;
        }
        self.notify();
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
