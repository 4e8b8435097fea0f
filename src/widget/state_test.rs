use super::*;
use crate::widget::message::Role;

#[test]
fn new_state_seeds_greeting() {
    let state = ConversationState::new();
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].role, Role::Assistant);
    assert_eq!(state.history[0].content, GREETING);
}

#[test]
fn new_state_empty_input() {
    let state = ConversationState::new();
    assert!(state.pending_input.is_empty());
}

#[test]
fn new_state_not_awaiting() {
    let state = ConversationState::new();
    assert!(!state.is_awaiting_reply);
}
