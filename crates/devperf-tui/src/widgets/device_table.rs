//! Device table widget
//!
//! One row per visible device. Sortable-looking columns carry a `⇅` marker;
//! no sort is wired behind it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use devperf_core::DeviceRecord;

use crate::theme::{palette, styles};

pub const EMPTY_MESSAGE: &str = "没有找到符合条件的设备";
const SORT_MARKER: &str = " ⇅";

/// (title, sortable, width)
const COLUMNS: [(&str, bool, Constraint); 8] = [
    ("设备ID", false, Constraint::Length(10)),
    ("操作系统", false, Constraint::Length(12)),
    ("设备型号", false, Constraint::Min(16)),
    ("档位", true, Constraint::Length(8)),
    ("总启动耗时", true, Constraint::Length(13)),
    ("首屏渲染耗时", true, Constraint::Length(15)),
    ("可交互耗时", true, Constraint::Length(13)),
    ("操作", false, Constraint::Length(26)),
];

pub struct DeviceTable<'a> {
    rows: &'a [&'a DeviceRecord],
    cursor: Option<usize>,
    focused: bool,
}

impl<'a> DeviceTable<'a> {
    pub fn new(rows: &'a [&'a DeviceRecord]) -> Self {
        Self {
            rows,
            cursor: None,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header() -> Row<'static> {
        let cells = COLUMNS.iter().map(|(title, sortable, _)| {
            let mut spans = vec![Span::raw(*title)];
            if *sortable {
                spans.push(Span::styled(SORT_MARKER, styles::text_muted()));
            }
            Cell::from(Line::from(spans))
        });
        Row::new(cells).style(
            Style::default()
                .fg(palette::TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn row(record: &DeviceRecord) -> Row<'static> {
        let startup_style = if record.is_slow {
            styles::status_red().add_modifier(Modifier::BOLD)
        } else {
            styles::text_secondary()
        };

        let actions = Line::from(vec![
            Span::styled("查看详情", styles::link()),
            Span::raw(" "),
            Span::styled(
                "对比指标",
                styles::link().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::raw(" "),
            Span::styled("日志", styles::link()),
        ]);

        Row::new(vec![
            Cell::from(record.id.clone()).style(styles::text_primary()),
            Cell::from(record.os.clone()).style(styles::text_secondary()),
            Cell::from(record.model.clone()).style(styles::text_primary()),
            Cell::from(Line::from(Span::styled(
                format!(" {} ", record.tier.label()),
                styles::tier_badge(record.tier),
            ))),
            Cell::from(record.startup_time.clone()).style(startup_style),
            Cell::from(record.render_time.clone()).style(styles::text_secondary()),
            Cell::from(record.interactive_time.clone()).style(styles::text_secondary()),
            Cell::from(actions),
        ])
    }
}

impl Widget for DeviceTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(" 设备列表 ")
            .style(Style::default().bg(palette::CARD_BG));

        if self.rows.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height == 0 {
                return;
            }
            let message_area = Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::styled(EMPTY_MESSAGE, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(message_area, buf);
            return;
        }

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let table = Table::new(
            self.rows.iter().map(|r| Self::row(r)),
            COLUMNS.iter().map(|(_, _, width)| *width),
        )
        .header(Self::header())
        .block(block)
        .column_spacing(1)
        .row_highlight_style(highlight)
        .highlight_symbol("› ");

        let mut state = TableState::default().with_selected(self.cursor);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use devperf_core::generate_devices_seeded;

    fn records() -> Vec<DeviceRecord> {
        generate_devices_seeded(10, 8)
    }

    #[test]
    fn test_header_columns_and_sort_markers() {
        let data = records();
        let rows: Vec<&DeviceRecord> = data.iter().collect();
        let mut term = TestTerminal::with_size(140, 14);
        term.render_widget(DeviceTable::new(&rows), term.area());

        for title in ["设备ID", "操作系统", "设备型号", "档位", "总启动耗时", "操作"] {
            assert!(term.line_contains_text(1, title), "missing column {}", title);
        }
        assert_eq!(term.content().lines().nth(1).unwrap().matches('⇅').count(), 4);
    }

    #[test]
    fn test_rows_render_device_fields() {
        let data = records();
        let rows: Vec<&DeviceRecord> = data.iter().collect();
        let mut term = TestTerminal::with_size(140, 14);
        term.render_widget(DeviceTable::new(&rows), term.area());

        assert!(term.line_contains(2, &data[0].id));
        assert!(term.line_contains(2, &data[0].startup_time));
        assert!(term.line_contains_text(2, "对比指标"));
        assert!(term.line_contains_text(2, data[0].tier.label()));
    }

    #[test]
    fn test_slow_startup_is_red() {
        let data = records();
        let rows: Vec<&DeviceRecord> = data.iter().collect();
        let mut term = TestTerminal::with_size(140, 14);
        term.render_widget(DeviceTable::new(&rows), term.area());

        for (i, record) in data.iter().enumerate() {
            let y = 2 + i as u16;
            let x = term
                .find_text_x(y, &record.startup_time)
                .expect("startup time rendered");
            let fg = term.buffer()[(x, y)].fg;
            if record.is_slow {
                assert_eq!(fg, palette::STATUS_RED);
            } else {
                assert_ne!(fg, palette::STATUS_RED);
            }
        }
    }

    #[test]
    fn test_empty_rows_show_message() {
        let rows: Vec<&DeviceRecord> = Vec::new();
        let mut term = TestTerminal::with_size(80, 8);
        term.render_widget(DeviceTable::new(&rows), term.area());

        assert!(term.buffer_contains_text(EMPTY_MESSAGE));
        assert!(!term.buffer_contains_text("设备ID"));
    }

    #[test]
    fn test_cursor_row_highlighted_when_focused() {
        let data = records();
        let rows: Vec<&DeviceRecord> = data.iter().collect();
        let mut term = TestTerminal::with_size(140, 14);
        term.render_widget(DeviceTable::new(&rows).cursor(3).focused(true), term.area());

        assert!(term.line_contains(5, "›"));
        assert_eq!(term.buffer()[(5, 5)].bg, palette::ACCENT);
    }
}
