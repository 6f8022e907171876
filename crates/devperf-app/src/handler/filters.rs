//! Filter row handlers

use crate::state::{AppState, FilterRow};

use super::UpdateResult;

pub fn cycle_tier(state: &mut AppState, forward: bool) -> UpdateResult {
    let tier = state.filters().tier;
    state.set_tier_filter(if forward { tier.next() } else { tier.prev() });
    UpdateResult::none()
}

pub fn cycle_os(state: &mut AppState, forward: bool) -> UpdateResult {
    let os = state.filters().os;
    state.set_os_filter(if forward { os.next() } else { os.prev() });
    UpdateResult::none()
}

pub fn cycle_mode(state: &mut AppState, forward: bool) -> UpdateResult {
    let mode = state.filters().mode;
    state.set_mode_filter(if forward { mode.next() } else { mode.prev() });
    UpdateResult::none()
}

/// Change the value of whichever row the filter cursor is on
pub fn cycle_focused(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.filter_row {
        FilterRow::Tier => cycle_tier(state, forward),
        FilterRow::Os => cycle_os(state, forward),
        FilterRow::Mode => cycle_mode(state, forward),
    }
}
