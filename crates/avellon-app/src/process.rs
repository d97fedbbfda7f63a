//! Message processing
//!
//! Runs a message through the TEA update function, following any chain of
//! follow-up messages it produces.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

/// Process a batch of messages in order
pub fn process_all(state: &mut AppState, messages: impl IntoIterator<Item = Message>) {
    for message in messages {
        process_message(state, message);
    }
}
