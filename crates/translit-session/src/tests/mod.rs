mod direction;
mod proptest_fsm;
mod simulator;

use super::{EditResponse, EditSession, InputEvent};

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut EditSession<'_>, s: &str) -> Vec<EditResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let resp = session.handle_event(InputEvent::Text(ch.to_string()));
        responses.push(resp);
    }
    responses
}
