//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.
//!
//! Most dashboard text is CJK. A wide character occupies two cells and the
//! second cell holds a blank, so `buffer_contains("总启动耗时")` never matches.
//! Use the `*_text` variants (whitespace-insensitive) or `find_text_x`
//! (wide-aware) for those.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(MainHeader::new(Tab::Details), term.area());
//! assert!(term.buffer_contains_text("云测试服务"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

use devperf_app::config::Settings;
use devperf_app::AppState;
use devperf_core::generate_devices_seeded;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Size that fits the full (non-compact) details layout
pub const FULL_WIDTH: u16 = 120;
pub const FULL_HEIGHT: u16 = 40;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a terminal large enough for the full details layout (120x40)
    pub fn full() -> Self {
        Self::with_size(FULL_WIDTH, FULL_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function (full-screen views)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        // TestBackend keeps stale glyphs in cells that the frame diff skips
        // after wide characters; clear so each frame is read in isolation.
        self.terminal.clear().expect("Failed to clear test terminal");
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Like `buffer_contains`, ignoring all whitespace on both sides
    pub fn buffer_contains_text(&self, text: &str) -> bool {
        strip_whitespace(&buffer_to_string(self.buffer())).contains(&strip_whitespace(text))
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Like `line_contains`, ignoring all whitespace on both sides
    pub fn line_contains_text(&self, line: u16, text: &str) -> bool {
        strip_whitespace(&get_line_content(self.buffer(), line)).contains(&strip_whitespace(text))
    }

    /// Column of the first cell where `text` starts on `line`.
    ///
    /// Blank continuation cells behind wide characters are skipped, so
    /// `text` is matched as written.
    pub fn find_text_x(&self, line: u16, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        if line >= buffer.area.height || text.is_empty() {
            return None;
        }

        let mut graphemes: Vec<(u16, &str)> = Vec::new();
        let mut x = 0;
        while x < buffer.area.width {
            let symbol = buffer[(x, line)].symbol();
            graphemes.push((x, symbol));
            x += symbol.width().max(1) as u16;
        }

        (0..graphemes.len()).find_map(|start| {
            let mut joined = String::new();
            for (_, symbol) in &graphemes[start..] {
                if joined.len() >= text.len() {
                    break;
                }
                joined.push_str(symbol);
            }
            joined.starts_with(text).then_some(graphemes[start].0)
        })
    }

    /// Get the content of a specific cell
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// AppState over a deterministic 25-device fixture
pub fn create_test_state() -> AppState {
    AppState::with_records(generate_devices_seeded(25, 42), Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_custom_size() {
        let term = TestTerminal::with_size(100, 50);
        assert_eq!(term.area().width, 100);
        assert_eq!(term.area().height, 50);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
    }

    #[test]
    fn test_wide_text_helpers() {
        let mut term = TestTerminal::with_size(20, 2);
        term.render_widget(Paragraph::new("ab设备ID"), term.area());

        assert!(term.buffer_contains_text("设备ID"));
        assert!(term.line_contains_text(0, "ab 设备"));
        assert_eq!(term.find_text_x(0, "ab"), Some(0));
        assert_eq!(term.find_text_x(0, "设备"), Some(2));
        assert_eq!(term.find_text_x(0, "ID"), Some(6));
        assert_eq!(term.find_text_x(0, "xyz"), None);
        assert_eq!(term.find_text_x(5, "ab"), None);
    }

    #[test]
    fn test_cell_at() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("AB"), term.area());

        assert_eq!(term.cell_at(0, 0), Some("A"));
        assert_eq!(term.cell_at(1, 0), Some("B"));
        assert_eq!(term.cell_at(2, 0), Some(" "));
        assert_eq!(term.cell_at(100, 100), None);
    }

    #[test]
    fn test_create_test_state() {
        let state = create_test_state();
        assert_eq!(state.records().len(), 25);
    }
}
