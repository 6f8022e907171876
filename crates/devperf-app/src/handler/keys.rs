//! Key event handlers for each tab and focus

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, Tab};
use devperf_core::MetricCategory;

/// Convert key events to messages based on current tab and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.active_tab {
        Tab::Overview => handle_key_overview(key),
        Tab::Details => handle_key_details(state, key),
    }
}

/// The Overview tab only supports quitting and switching back
fn handle_key_overview(key: InputKey) -> Option<Message> {
    match key {
        key if key.is_quit() => Some(Message::Quit),
        InputKey::Char('v') => Some(Message::ToggleTab),
        _ => None,
    }
}

fn handle_key_details(state: &AppState, key: InputKey) -> Option<Message> {
    let focused = match state.focus {
        Focus::Filters => handle_key_filters(key),
        Focus::Scores => handle_key_scores(state, key),
        Focus::Table => handle_key_table(key),
    };
    focused.or_else(|| handle_key_global(key))
}

/// Keys that work regardless of focus
fn handle_key_global(key: InputKey) -> Option<Message> {
    if let Some(index) = key.category_digit() {
        return MetricCategory::from_index(index).map(Message::SelectCategory);
    }

    match key {
        // Quit
        key if key.is_quit() => Some(Message::Quit),

        // Focus and tabs
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Char('v') => Some(Message::ToggleTab),

        // Filters ('T', 'O', 'M' cycle backward)
        InputKey::Char('t') => Some(Message::CycleTierFilter { forward: true }),
        InputKey::Char('T') => Some(Message::CycleTierFilter { forward: false }),
        InputKey::Char('o') => Some(Message::CycleOsFilter { forward: true }),
        InputKey::Char('O') => Some(Message::CycleOsFilter { forward: false }),
        InputKey::Char('m') => Some(Message::CycleModeFilter { forward: true }),
        InputKey::Char('M') => Some(Message::CycleModeFilter { forward: false }),

        // Pagination
        InputKey::Char('[') | InputKey::PageUp => Some(Message::PrevPage),
        InputKey::Char(']') | InputKey::PageDown => Some(Message::NextPage),

        // Selection
        InputKey::Char('x') | InputKey::Backspace => Some(Message::ClearSelection),

        _ => None,
    }
}

fn handle_key_filters(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::FilterRowUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::FilterRowDown),
        InputKey::Left | InputKey::Char('h') => Some(Message::CycleFocusedFilter { forward: false }),
        InputKey::Right | InputKey::Char('l') => Some(Message::CycleFocusedFilter { forward: true }),
        _ => None,
    }
}

fn handle_key_scores(state: &AppState, key: InputKey) -> Option<Message> {
    let step = i32::from(state.settings.ui.scroll_step);
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::CarouselScrollBy(-step)),
        InputKey::Right | InputKey::Char('l') => Some(Message::CarouselScrollBy(step)),
        InputKey::Enter => Some(Message::SelectCategory(state.carousel.active())),
        InputKey::Home => Some(Message::SelectCategory(MetricCategory::Startup)),
        InputKey::End => Some(Message::SelectCategory(MetricCategory::Compatibility)),
        _ => None,
    }
}

fn handle_key_table(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Left | InputKey::Char('h') => Some(Message::PrevPage),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextPage),
        InputKey::Enter | InputKey::Char('c') => Some(Message::CompareCursorRow),
        _ => None,
    }
}
