//! Terminal-agnostic key codes for the dashboard.
//!
//! The TUI converts crossterm events into `InputKey` so the update function
//! never sees a crossterm type.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character: filter cycling, category digits, `[` / `]` paging
    Char(char),
    /// Ctrl + character; only Ctrl+C is bound
    CharCtrl(char),

    /// Row and filter-value movement
    Up,
    Down,
    Left,
    Right,
    /// First / last score card
    Home,
    End,
    /// Previous / next table page
    PageUp,
    PageDown,

    /// Compare the row under the cursor
    Enter,
    Esc,
    /// Focus cycling between filters, score cards and table
    Tab,
    BackTab,
    /// Return to the fleet averages
    Backspace,
}

impl InputKey {
    /// `q`, Esc and Ctrl+C leave the dashboard from any focus
    pub fn is_quit(self) -> bool {
        matches!(self, InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c'))
    }

    /// 0-based category index for the `1`..`4` keys
    pub fn category_digit(self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='4') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}
