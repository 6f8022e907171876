//! Message processing loop

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Upper bound on chained follow-up messages from a single input
const MAX_FOLLOW_UPS: usize = 16;

/// Process a message through the TEA update function
///
/// Follow-up messages returned by `update` are processed in the same cycle.
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    let mut steps = 0;
    while let Some(m) = msg {
        if steps > MAX_FOLLOW_UPS {
            tracing::warn!("Dropping follow-up chain after {} steps: {:?}", steps, m);
            break;
        }
        msg = handler::update(state, m).message;
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::Tab;

    #[test]
    fn test_follow_up_messages_are_processed() {
        let mut state = AppState::new();
        // Key('v') → ToggleTab → SwitchTab(Overview)
        process_message(&mut state, Message::Key(InputKey::Char('v')));
        assert_eq!(state.active_tab, Tab::Overview);
    }
}
