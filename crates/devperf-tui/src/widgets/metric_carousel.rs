//! Metric card carousel
//!
//! Lays out one slide per category side by side, each exactly one viewport
//! wide, and draws the window that starts at the current horizontal offset.
//! Each slide holds that category's metric cards.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use devperf_core::{CategoryView, MetricView, Projection};

use crate::theme::{palette, styles};

const GAUGE_FILLED: &str = "█";
const GAUGE_EMPTY: &str = "░";
const GAUGE_MARKER: &str = "┃";

pub struct MetricCarousel<'a> {
    projection: &'a Projection,
    offset: u32,
}

impl<'a> MetricCarousel<'a> {
    pub fn new(projection: &'a Projection, offset: u32) -> Self {
        Self { projection, offset }
    }
}

impl Widget for MetricCarousel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = i64::from(area.width);
        let offset = i64::from(self.offset);
        let local = Rect::new(0, 0, area.width, area.height);

        for (i, view) in self.projection.per_category.iter().enumerate() {
            let slide_x = i as i64 * width - offset;
            if slide_x >= width || slide_x + width <= 0 {
                continue;
            }

            let mut slide = Buffer::empty(local);
            Slide { view }.render(local, &mut slide);

            for col in 0..area.width {
                let target = slide_x + i64::from(col);
                if !(0..width).contains(&target) {
                    continue;
                }
                for row in 0..area.height {
                    buf[(area.x + target as u16, area.y + row)] = slide[(col, row)].clone();
                }
            }
        }
    }
}

/// One category's cards, rendered into a viewport-sized buffer
struct Slide<'a> {
    view: &'a CategoryView,
}

impl Widget for Slide<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.view.metrics.len() as u32;
        if count == 0 {
            return;
        }
        let theme = styles::category_color(self.view.category);
        let columns = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(area);

        for (metric, column) in self.view.metrics.iter().zip(columns.iter()) {
            MetricCard { metric, theme }.render(*column, buf);
        }
    }
}

struct MetricCard<'a> {
    metric: &'a MetricView,
    theme: Color,
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.metric;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_inactive())
            .title(Span::styled(
                format!(" {} ", m.title),
                Style::default().fg(self.theme),
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let value = Line::from(vec![
            Span::raw(" "),
            Span::styled(m.display.clone(), styles::text_bright_bold()),
            Span::raw(" "),
            Span::styled(m.unit, styles::text_muted()),
        ]);
        buf.set_line(inner.x, inner.y, &value, inner.width);

        if inner.height > 1 {
            let bar_color = if m.is_critical {
                palette::STATUS_RED
            } else {
                self.theme
            };
            let gauge = gauge_line(m, inner.width.saturating_sub(2), bar_color);
            buf.set_line(inner.x + 1, inner.y + 1, &gauge, inner.width.saturating_sub(2));
        }

        if inner.height > 2 {
            let avg = if m.has_avg() {
                format!("AVG: {}", m.avg)
            } else {
                String::new()
            };
            let max = format!("MAX: {}", m.max);
            let gap = (inner.width as usize)
                .saturating_sub(avg.len() + max.len() + 2)
                .max(1);
            let markers = Line::from(vec![
                Span::raw(" "),
                Span::styled(avg, styles::text_muted()),
                Span::raw(" ".repeat(gap)),
                Span::styled(max, styles::text_muted()),
            ]);
            buf.set_line(inner.x, inner.y + 2, &markers, inner.width);
        }
    }
}

/// Gauge bar `width` cells wide, with a marker at the reference average
fn gauge_line(metric: &MetricView, width: u16, color: Color) -> Line<'static> {
    let width = width as usize;
    if width == 0 {
        return Line::default();
    }

    let filled = (metric.fill_ratio() * width as f64).round() as usize;
    let marker = if metric.has_avg() && metric.max > 0.0 {
        let ratio = (metric.avg / metric.max).clamp(0.0, 1.0);
        Some(((ratio * width as f64).round() as usize).min(width - 1))
    } else {
        None
    };

    let spans = (0..width)
        .map(|i| {
            if Some(i) == marker {
                Span::styled(
                    GAUGE_MARKER,
                    Style::default()
                        .fg(palette::GAUGE_MARKER)
                        .add_modifier(Modifier::BOLD),
                )
            } else if i < filled {
                Span::styled(GAUGE_FILLED, Style::default().fg(color))
            } else {
                Span::styled(GAUGE_EMPTY, Style::default().fg(palette::GAUGE_TRACK))
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use devperf_core::{project, MetricCategory};

    fn metric(value: f64, max: f64, avg: f64, critical: bool) -> MetricView {
        MetricView {
            title: "t",
            unit: "ms",
            value,
            display: format!("{}", value),
            max,
            avg,
            is_critical: critical,
        }
    }

    #[test]
    fn test_offset_zero_shows_startup_slide() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(120, 6);
        term.render_widget(MetricCarousel::new(&projection, 0), term.area());

        assert!(term.buffer_contains_text("总启动耗时"));
        assert!(term.buffer_contains("4871"));
        assert!(!term.buffer_contains_text("平均帧率"));
    }

    #[test]
    fn test_slide_offset_shows_matching_category() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(120, 6);
        let offset = MetricCategory::Network.index() as u32 * 120;
        term.render_widget(MetricCarousel::new(&projection, offset), term.area());

        assert!(term.buffer_contains_text("平均RTT延迟"));
        assert!(term.buffer_contains("MB/s"));
        assert!(!term.buffer_contains_text("总启动耗时"));
    }

    #[test]
    fn test_half_offset_shows_two_slides() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(120, 6);
        term.render_widget(MetricCarousel::new(&projection, 60), term.area());

        // Right half of startup slide and left half of runtime slide
        assert!(term.buffer_contains_text("首屏渲染耗时"));
        assert!(term.buffer_contains_text("平均帧率"));
        assert!(!term.buffer_contains_text("总启动耗时"));
    }

    #[test]
    fn test_card_shows_avg_and_max() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(160, 6);
        term.render_widget(MetricCarousel::new(&projection, 0), term.area());

        assert!(term.buffer_contains("AVG: 3320"));
        assert!(term.buffer_contains("MAX: 8860"));
    }

    #[test]
    fn test_crash_card_hides_avg() {
        let projection = project(None);
        let mut term = TestTerminal::with_size(120, 6);
        let offset = MetricCategory::Compatibility.index() as u32 * 120;
        term.render_widget(MetricCarousel::new(&projection, offset), term.area());

        assert!(term.buffer_contains("AVG: 0.2"));
        assert!(term.buffer_contains("MAX: 1"));
        assert_eq!(term.content().matches("AVG:").count(), 1);
    }

    #[test]
    fn test_gauge_fill_and_color() {
        let line = gauge_line(&metric(50.0, 100.0, 0.0, true), 10, palette::STATUS_RED);
        let filled: Vec<_> = line
            .spans
            .iter()
            .filter(|s| s.content == GAUGE_FILLED)
            .collect();
        assert_eq!(filled.len(), 5);
        assert!(filled.iter().all(|s| s.style.fg == Some(palette::STATUS_RED)));
    }

    #[test]
    fn test_gauge_marker_at_average() {
        let line = gauge_line(&metric(0.0, 100.0, 40.0, false), 10, palette::THEME_BLUE);
        assert_eq!(line.spans[4].content, GAUGE_MARKER);
    }

    #[test]
    fn test_gauge_zero_width() {
        let line = gauge_line(&metric(1.0, 2.0, 1.0, false), 0, palette::THEME_BLUE);
        assert!(line.spans.is_empty());
    }
}
