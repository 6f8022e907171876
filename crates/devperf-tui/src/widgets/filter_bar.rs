//! Filter bar widget
//!
//! Three option rows (tier, OS, run mode). The row under the filter cursor is
//! marked while the panel has focus. In compact mode all three rows share a
//! single line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use devperf_app::state::FilterRow;
use devperf_core::{Filters, ModeFilter, OsFilter, TierFilter};

use crate::theme::{palette, styles};

pub struct FilterBar {
    filters: Filters,
    /// Cursor row when the panel is focused
    focused_row: Option<FilterRow>,
    compact: bool,
}

impl FilterBar {
    pub fn new(filters: Filters) -> Self {
        Self {
            filters,
            focused_row: None,
            compact: false,
        }
    }

    pub fn focused_row(mut self, row: Option<FilterRow>) -> Self {
        self.focused_row = row;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn row_spans(&self, row: FilterRow) -> Vec<Span<'static>> {
        let focused = self.focused_row == Some(row);
        let (label, options): (&str, Vec<(&'static str, bool)>) = match row {
            FilterRow::Tier => (
                "设备档位",
                TierFilter::ALL
                    .iter()
                    .map(|t| (t.label(), *t == self.filters.tier))
                    .collect(),
            ),
            FilterRow::Os => (
                "操作系统",
                OsFilter::ALL
                    .iter()
                    .map(|o| (o.label(), *o == self.filters.os))
                    .collect(),
            ),
            FilterRow::Mode => (
                "运行模式",
                ModeFilter::ALL
                    .iter()
                    .map(|m| (m.label(), *m == self.filters.mode))
                    .collect(),
            ),
        };

        let marker = if focused { "› " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(format!("{}: ", label), styles::text_secondary()),
        ];
        for (option, active) in options {
            let style = match (active, focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::unfocused_selected(),
                (false, _) => styles::text_primary(),
            };
            spans.push(Span::styled(format!(" {} ", option), style));
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Widget for FilterBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused_row.is_some())
            .title(" 筛选 ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = [FilterRow::Tier, FilterRow::Os, FilterRow::Mode];
        if self.compact {
            let mut spans = Vec::new();
            for row in rows {
                spans.extend(self.row_spans(row));
            }
            buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
            return;
        }

        for (i, row) in rows.into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x, y, &Line::from(self.row_spans(row)), inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_three_rows() {
        let mut term = TestTerminal::with_size(100, 5);
        term.render_widget(FilterBar::new(Filters::default()), term.area());

        assert!(term.line_contains_text(1, "设备档位"));
        assert!(term.line_contains_text(2, "操作系统"));
        assert!(term.line_contains_text(3, "运行模式"));
        assert!(term.line_contains(2, "Android"));
        assert!(term.line_contains(2, "IOS"));
        assert!(term.line_contains_text(3, "高性能/高性能+"));
    }

    #[test]
    fn test_focused_row_marker() {
        let mut term = TestTerminal::with_size(100, 5);
        term.render_widget(
            FilterBar::new(Filters::default()).focused_row(Some(FilterRow::Os)),
            term.area(),
        );
        assert!(term.line_contains(2, "›"));
        assert!(!term.line_contains(1, "›"));
    }

    #[test]
    fn test_active_option_highlighted_when_focused() {
        let filters = Filters {
            os: OsFilter::Ios,
            ..Filters::default()
        };
        let mut term = TestTerminal::with_size(100, 5);
        term.render_widget(
            FilterBar::new(filters).focused_row(Some(FilterRow::Os)),
            term.area(),
        );

        let x = term.find_text_x(2, "I").expect("IOS option rendered");
        assert_eq!(term.buffer()[(x, 2)].bg, palette::ACCENT);
    }

    #[test]
    fn test_compact_single_line() {
        let mut term = TestTerminal::with_size(160, 3);
        term.render_widget(FilterBar::new(Filters::default()).compact(true), term.area());
        assert!(term.line_contains_text(1, "设备档位"));
        assert!(term.line_contains_text(1, "操作系统"));
        assert!(term.line_contains_text(1, "运行模式"));
    }
}
