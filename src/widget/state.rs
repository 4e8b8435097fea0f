//! Conversation state owned by the widget controller.

use serde::Serialize;

use super::message::Message;

/// The assistant message every fresh session starts from.
pub const GREETING: &str = "Hello! I'm your Mercari Japan shopping assistant. \
I can help you find items, compare prices, and check shipping options. \
What are you looking for today?";

/// Per-instance conversation state. Created with the seeded greeting,
/// discarded on session end — nothing persists across sessions.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationState {
    /// Ordered turns, append-only. Never reordered or deduplicated.
    pub history: Vec<Message>,
    /// Text currently being composed. Cleared on submission regardless
    /// of whether the request succeeds.
    pub pending_input: String,
    /// True from submission until the exchange resolves. Gates input
    /// and duplicate submissions.
    pub is_awaiting_reply: bool,
}

impl ConversationState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Message::assistant(GREETING)],
            pending_input: String::new(),
            is_awaiting_reply: false,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
