//! Table compare handlers

use crate::state::{AppState, Focus};
use tracing::{debug, warn};

use super::UpdateResult;

/// Compare the record under the table cursor
pub fn compare_cursor_row(state: &mut AppState) -> UpdateResult {
    match state.cursor_record_index() {
        Some(index) => compare_record(state, index),
        None => {
            warn!("Compare ignored: page {} has no rows", state.page());
            UpdateResult::none()
        }
    }
}

/// Compare the record at a 0-based row of the visible page
pub fn compare_row(state: &mut AppState, row: usize) -> UpdateResult {
    match state.visible_indices().get(row).copied() {
        Some(index) => compare_record(state, index),
        None => {
            warn!("Compare ignored: no row {} on page {}", row, state.page());
            UpdateResult::none()
        }
    }
}

/// The selection becomes the record and focus jumps to the score
/// navigation at the top of the screen.
fn compare_record(state: &mut AppState, index: usize) -> UpdateResult {
    if state.compare(index) {
        if let Some(record) = state.selected_record() {
            debug!("Comparing device {} ({})", record.id, record.model);
        }
        state.focus = Focus::Scores;
    }
    UpdateResult::none()
}
