//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::Tab;
use devperf_core::{MetricCategory, ModeFilter, OsFilter, TierFilter};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (drives carousel animation)
    Tick,

    /// Quit the application (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to a specific tab
    SwitchTab(Tab),
    /// Toggle between Overview and Details
    ToggleTab,
    /// Move focus Filters → Scores → Table
    FocusNext,
    /// Move focus in reverse
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Filter Messages
    // ─────────────────────────────────────────────────────────
    SetTierFilter(TierFilter),
    SetOsFilter(OsFilter),
    SetModeFilter(ModeFilter),
    /// Cycle the tier filter (forward or backward)
    CycleTierFilter { forward: bool },
    /// Cycle the OS filter
    CycleOsFilter { forward: bool },
    /// Cycle the mode filter
    CycleModeFilter { forward: bool },
    /// Move the filter-row cursor up
    FilterRowUp,
    /// Move the filter-row cursor down
    FilterRowDown,
    /// Change the value of the focused filter row
    CycleFocusedFilter { forward: bool },

    // ─────────────────────────────────────────────────────────
    // Pagination Messages
    // ─────────────────────────────────────────────────────────
    /// Jump to a 1-based page (clamped)
    GoToPage(usize),
    /// Next page (no-op on the last page)
    NextPage,
    /// Previous page (no-op on page 1)
    PrevPage,

    // ─────────────────────────────────────────────────────────
    // Table Messages
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    /// Compare the device under the table cursor
    CompareCursorRow,
    /// Compare the device at a 0-based row of the current page
    CompareRow(usize),
    /// Clear the compared device, restoring fleet averages
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Carousel Messages
    // ─────────────────────────────────────────────────────────
    /// Click-driven category selection
    SelectCategory(MetricCategory),
    /// Scroll-driven update from an absolute offset
    CarouselScrolled { offset: u32 },
    /// Manual scroll by a signed number of columns
    CarouselScrollBy(i32),
    /// Horizontal mouse wheel (one configured scroll step)
    CarouselWheel { forward: bool },
}
