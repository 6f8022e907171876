//! Category selection and carousel scroll handlers

use crate::message::Message;
use crate::state::AppState;
use devperf_core::MetricCategory;

use super::UpdateResult;

/// Click-driven selection: switch the active category and scroll to it
pub fn select_category(state: &mut AppState, category: MetricCategory) -> UpdateResult {
    state.carousel.select(category);
    UpdateResult::none()
}

/// Advance any in-flight carousel animation by one frame
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    state.carousel.tick();
    UpdateResult::none()
}

/// One configured scroll step left or right
pub fn handle_wheel(state: &AppState, forward: bool) -> UpdateResult {
    let step = i32::from(state.settings.ui.scroll_step);
    let delta = if forward { step } else { -step };
    UpdateResult::message(Message::CarouselScrollBy(delta))
}
