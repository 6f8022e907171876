//! Score navigation: one card per category with its label and score

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use devperf_core::{MetricCategory, Projection};

use crate::theme::{palette, styles};

pub struct ScoreNav<'a> {
    projection: &'a Projection,
    active: MetricCategory,
    focused: bool,
}

impl<'a> ScoreNav<'a> {
    pub fn new(projection: &'a Projection, active: MetricCategory) -> Self {
        Self {
            projection,
            active,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ScoreNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.projection.per_category.len() as u32;
        if count == 0 || area.width == 0 {
            return;
        }

        let columns = Layout::horizontal(
            (0..count).map(|_| Constraint::Ratio(1, count)),
        )
        .split(area);

        for (view, column) in self.projection.per_category.iter().zip(columns.iter()) {
            let is_active = view.category == self.active;
            let theme = styles::category_color(view.category);

            let (border_style, border_type) = if is_active {
                let style = Style::default().fg(theme);
                if self.focused {
                    (style.add_modifier(Modifier::BOLD), BorderType::Thick)
                } else {
                    (style, BorderType::Rounded)
                }
            } else {
                (styles::border_inactive(), BorderType::Rounded)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .style(Style::default().bg(palette::CARD_BG));

            let score_style = if is_active {
                Style::default().fg(theme).add_modifier(Modifier::BOLD)
            } else {
                styles::text_bright_bold()
            };
            let index = view.category.index() + 1;

            let lines = vec![
                Line::styled(format!("{} {}", index, view.label), styles::text_secondary()),
                Line::styled(view.score.to_string(), score_style),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use devperf_core::project;

    #[test]
    fn test_renders_average_scores() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(100, 4);
        term.render_widget(
            ScoreNav::new(&projection, MetricCategory::Startup),
            term.area(),
        );

        for score in ["78", "90", "63", "77"] {
            assert!(term.line_contains(2, score), "missing score {}", score);
        }
        assert!(term.line_contains_text(1, "启动性能分"));
        assert!(term.line_contains_text(1, "兼容性"));
    }

    #[test]
    fn test_active_card_uses_theme_color() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(100, 4);
        term.render_widget(
            ScoreNav::new(&projection, MetricCategory::Network),
            term.area(),
        );

        // Third card starts at column 50; its top-left corner carries the theme
        assert_eq!(term.buffer()[(50, 0)].fg, palette::THEME_VIOLET);
        assert_eq!(term.buffer()[(0, 0)].fg, palette::BORDER_DIM);
    }
}
