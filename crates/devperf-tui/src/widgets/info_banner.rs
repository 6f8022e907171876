//! Info banner: compared device (or the averages label) and the scoring note

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use devperf_core::DeviceRecord;

use crate::theme::{palette, styles};

const NOTE_PREFIX: &str = "不同档位机型和系统的参考指标数值不同，当前展示分数为";

pub struct InfoBanner<'a> {
    selection: Option<&'a DeviceRecord>,
}

impl<'a> InfoBanner<'a> {
    pub fn new(selection: Option<&'a DeviceRecord>) -> Self {
        Self { selection }
    }
}

impl Widget for InfoBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let chip = match self.selection {
            Some(record) => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} {} ", record.model, record.os),
                    Style::default()
                        .fg(palette::CONTRAST_FG)
                        .bg(palette::THEME_BLUE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  [x] 清除对比", styles::text_muted()),
            ]),
            None => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    " 平均值 ",
                    Style::default().fg(palette::TEXT_PRIMARY).bg(palette::BORDER_DIM),
                ),
            ]),
        };

        let source = if self.selection.is_some() {
            "该设备实测值"
        } else {
            "平均值"
        };
        let note = Line::from(vec![
            Span::raw(" "),
            Span::styled(NOTE_PREFIX, styles::text_muted()),
            Span::styled(source, styles::text_secondary()),
        ]);

        buf.set_line(area.x, area.y, &chip, area.width);
        if area.height > 1 {
            buf.set_line(area.x, area.y + 1, &note, area.width);
        }
    }
}
