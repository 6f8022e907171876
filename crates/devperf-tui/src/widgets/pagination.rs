//! Pagination bar: item range on the left, page controls on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use devperf_core::item_range;

use crate::theme::styles;

pub struct PaginationBar {
    page: usize,
    total_pages: usize,
    total_items: usize,
    page_size: usize,
}

impl PaginationBar {
    pub fn new(page: usize, total_pages: usize, total_items: usize, page_size: usize) -> Self {
        Self {
            page,
            total_pages,
            total_items,
            page_size,
        }
    }

    fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    fn next_enabled(&self) -> bool {
        self.total_pages > 0 && self.page < self.total_pages
    }

    fn summary(&self) -> Line<'static> {
        let (start, end) = item_range(self.total_items, self.page, self.page_size);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("显示第 {} 条 - 第 {} 条，共 {} 条", start, end, self.total_items),
                styles::text_secondary(),
            ),
        ])
    }

    /// Page buttons to show: every page, or the first and last pages plus
    /// `radius` pages around the current one with gaps between
    fn page_slots(&self, radius: Option<usize>) -> Vec<Option<usize>> {
        let Some(radius) = radius else {
            return (1..=self.total_pages).map(Some).collect();
        };

        let low = self.page.saturating_sub(radius).max(1);
        let high = (self.page + radius).min(self.total_pages);
        let mut pages = vec![1];
        pages.extend(low..=high);
        pages.push(self.total_pages);
        pages.retain(|p| *p >= 1);
        pages.dedup();

        let mut slots = Vec::with_capacity(pages.len() + 2);
        for (i, page) in pages.iter().enumerate() {
            if i > 0 && page - pages[i - 1] > 1 {
                slots.push(None);
            }
            slots.push(Some(*page));
        }
        slots
    }

    fn controls_line(&self, slots: &[Option<usize>]) -> Line<'static> {
        let arrow = |symbol: &'static str, enabled: bool| {
            let style = if enabled {
                styles::accent_bold()
            } else {
                styles::disabled()
            };
            Span::styled(symbol, style)
        };

        let mut spans = vec![arrow("‹", self.prev_enabled()), Span::raw(" ")];
        for slot in slots {
            match slot {
                Some(page) => {
                    let style = if *page == self.page {
                        styles::focused_selected()
                    } else {
                        styles::text_primary()
                    };
                    spans.push(Span::styled(format!(" {} ", page), style));
                }
                None => spans.push(Span::styled(" … ", styles::text_muted())),
            }
        }
        spans.push(Span::raw(" "));
        spans.push(arrow("›", self.next_enabled()));
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    /// Widest control strip that fits in `max_width`, narrowing the page
    /// list around the current page. Prev/next are always kept.
    fn controls(&self, max_width: u16) -> Line<'static> {
        [None, Some(2), Some(1), Some(0)]
            .into_iter()
            .map(|radius| self.controls_line(&self.page_slots(radius)))
            .find(|line| line.width() <= usize::from(max_width))
            .unwrap_or_else(|| self.controls_line(&[Some(self.page)]))
    }
}

impl Widget for PaginationBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let summary = self.summary();
        let summary_width = summary.width() as u16;

        // The summary is truncated before the controls lose prev/next
        let controls = self.controls(area.width.saturating_sub(summary_width + 1));
        let controls_width = (controls.width() as u16).min(area.width);
        let x = area.x + area.width - controls_width;

        buf.set_line(area.x, area.y, &summary, area.width - controls_width);
        buf.set_line(x, area.y, &controls, controls_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use crate::test_utils::TestTerminal;

    fn render(bar: PaginationBar) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(bar, term.area());
        term
    }

    #[test]
    fn test_summary_text() {
        let term = render(PaginationBar::new(2, 3, 25, 10));
        assert!(term.line_contains_text(0, "显示第11条-第20条，共25条"));
    }

    #[test]
    fn test_empty_summary() {
        let term = render(PaginationBar::new(1, 0, 0, 10));
        assert!(term.line_contains_text(0, "显示第0条-第0条，共0条"));
    }

    #[test]
    fn test_page_buttons_and_current_highlight() {
        let term = render(PaginationBar::new(2, 3, 25, 10));
        assert!(term.line_contains(0, " 1  2  3 "));

        let x = term.find_text_x(0, " 2 ").expect("page 2 button") + 1;
        assert_eq!(term.buffer()[(x, 0)].bg, palette::ACCENT);
    }

    #[test]
    fn test_many_pages_collapse_around_current() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(PaginationBar::new(10, 20, 200, 10), term.area());

        assert!(term.line_contains_text(0, "显示第91条-第100条，共200条"));
        assert!(term.line_contains(0, "‹"));
        assert!(term.line_contains(0, "›"));
        assert!(term.line_contains(0, " 1 "));
        assert!(term.line_contains(0, " 10 "));
        assert!(term.line_contains(0, " 20 "));
        assert!(term.line_contains(0, "…"));
        assert!(!term.line_contains(0, " 15 "));

        let x = term.find_text_x(0, " 10 ").expect("current page button") + 1;
        assert_eq!(term.buffer()[(x, 0)].bg, palette::ACCENT);
    }

    #[test]
    fn test_page_slots_gap_placement() {
        let bar = PaginationBar::new(2, 20, 200, 10);
        assert_eq!(
            bar.page_slots(Some(1)),
            vec![Some(1), Some(2), Some(3), None, Some(20)]
        );

        let bar = PaginationBar::new(20, 20, 200, 10);
        assert_eq!(bar.page_slots(Some(0)), vec![Some(1), None, Some(20)]);
    }

    #[test]
    fn test_narrow_width_keeps_prev_next() {
        let mut term = TestTerminal::with_size(24, 1);
        term.render_widget(PaginationBar::new(10, 20, 200, 10), term.area());

        assert!(term.line_contains(0, "‹"));
        assert!(term.line_contains(0, "›"));
        assert!(term.line_contains(0, " 10 "));
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let term = render(PaginationBar::new(1, 3, 25, 10));
        let prev = term.find_text_x(0, "‹").expect("prev arrow");
        let next = term.find_text_x(0, "›").expect("next arrow");
        assert_eq!(term.buffer()[(prev, 0)].fg, palette::TEXT_MUTED);
        assert_eq!(term.buffer()[(next, 0)].fg, palette::ACCENT);
    }

    #[test]
    fn test_next_disabled_on_last_page_and_when_empty() {
        let term = render(PaginationBar::new(3, 3, 25, 10));
        let next = term.find_text_x(0, "›").expect("next arrow");
        assert_eq!(term.buffer()[(next, 0)].fg, palette::TEXT_MUTED);

        let empty = PaginationBar::new(1, 0, 0, 10);
        assert!(!empty.next_enabled());
        assert!(!empty.prev_enabled());
    }
}
