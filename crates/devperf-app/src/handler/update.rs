//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::debug;

use super::{carousel, filters, keys::handle_key, table, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => carousel::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SwitchTab(tab) => {
            if state.active_tab != tab {
                debug!("Switching tab to {}", tab.id());
                state.active_tab = tab;
            }
            UpdateResult::none()
        }

        Message::ToggleTab => UpdateResult::message(Message::SwitchTab(state.active_tab.toggle())),

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        Message::SetTierFilter(tier) => {
            state.set_tier_filter(tier);
            UpdateResult::none()
        }

        Message::SetOsFilter(os) => {
            state.set_os_filter(os);
            UpdateResult::none()
        }

        Message::SetModeFilter(mode) => {
            state.set_mode_filter(mode);
            UpdateResult::none()
        }

        Message::CycleTierFilter { forward } => filters::cycle_tier(state, forward),
        Message::CycleOsFilter { forward } => filters::cycle_os(state, forward),
        Message::CycleModeFilter { forward } => filters::cycle_mode(state, forward),
        Message::CycleFocusedFilter { forward } => filters::cycle_focused(state, forward),

        Message::FilterRowUp => {
            state.filter_row = state.filter_row.up();
            UpdateResult::none()
        }

        Message::FilterRowDown => {
            state.filter_row = state.filter_row.down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Pagination
        // ─────────────────────────────────────────────────────────
        Message::GoToPage(page) => {
            state.go_to_page(page);
            UpdateResult::none()
        }

        Message::NextPage => {
            state.next_page();
            UpdateResult::none()
        }

        Message::PrevPage => {
            state.prev_page();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Table
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }

        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }

        Message::CompareCursorRow => table::compare_cursor_row(state),
        Message::CompareRow(row) => table::compare_row(state, row),

        Message::ClearSelection => {
            state.clear_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Carousel
        // ─────────────────────────────────────────────────────────
        Message::SelectCategory(category) => carousel::select_category(state, category),

        Message::CarouselScrolled { offset } => {
            state.carousel.on_scroll(offset);
            UpdateResult::none()
        }

        Message::CarouselScrollBy(delta) => {
            state.carousel.scroll_by(delta);
            UpdateResult::none()
        }

        Message::CarouselWheel { forward } => carousel::handle_wheel(state, forward),
    }
}
