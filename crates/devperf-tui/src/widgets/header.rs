//! Header bar widget
//!
//! Title, tab switcher and keybinding hints inside a glass container.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use devperf_app::state::Tab;

use crate::theme::{palette, styles};

const TITLE: &str = "云测试服务";

/// Main header showing the back chevron, title, tabs and keybindings
pub struct MainHeader {
    active_tab: Tab,
}

impl MainHeader {
    pub fn new(active_tab: Tab) -> Self {
        Self { active_tab }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, tab) in [Tab::Overview, Tab::Details].into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if tab == self.active_tab {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
        }
        spans
    }

    fn hint_spans() -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (key, label) in [("v", "切换"), ("Tab", "焦点"), ("q", "退出")] {
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", label), styles::text_muted()));
        }
        spans
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::styled(" ‹ ", styles::text_muted()),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw("   "),
        ];
        left.extend(self.tab_spans());
        let left_line = Line::from(left);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Keybinding hints right-aligned, only when they fit
        let hints = Line::from(Self::hint_spans());
        let hints_width = hints.width() as u16;
        if left_width + hints_width + 1 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_tabs() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(Tab::Details), term.area());

        assert!(term.buffer_contains_text("云测试服务"));
        assert!(term.buffer_contains_text("概览"));
        assert!(term.buffer_contains_text("设备详情"));
    }

    #[test]
    fn test_header_shows_hints_when_wide() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(Tab::Details), term.area());
        assert!(term.buffer_contains("[q]"));
    }

    #[test]
    fn test_header_hides_hints_when_narrow() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(MainHeader::new(Tab::Overview), term.area());
        assert!(!term.buffer_contains("[q]"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new(Tab::Overview), term.area());

        let x = term
            .find_text_x(1, "概")
            .expect("overview tab should be rendered");
        assert_eq!(term.buffer()[(x, 1)].bg, palette::ACCENT);
    }
}
