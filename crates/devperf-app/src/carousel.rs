//! Scroll-sync controller for the metric-card carousel
//!
//! The carousel lays out one slide per [`MetricCategory`], each exactly one
//! viewport wide. Two kinds of transitions keep the active category and the
//! horizontal scroll offset in sync:
//!
//! - scroll-driven: [`CarouselState::on_scroll`] derives the active category
//!   from `round(offset / viewport_width)`;
//! - click-driven: [`CarouselState::select`] sets the active category at once
//!   and starts an animated scroll toward `index * viewport_width`.
//!
//! While a click-driven animation is in flight its intermediate offsets do
//! not re-derive the active category. A new selection or a manual scroll
//! replaces any in-flight animation.

use devperf_core::MetricCategory;

/// Category whose slide is nearest to `offset`
///
/// Returns `None` for a zero-width viewport or an index past the last
/// category.
pub fn category_at_offset(offset: u32, viewport_width: u16) -> Option<MetricCategory> {
    if viewport_width == 0 {
        return None;
    }
    let index = (f64::from(offset) / f64::from(viewport_width)).round() as usize;
    MetricCategory::from_index(index)
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    active: MetricCategory,
    offset: u32,
    viewport_width: u16,
    /// Target offset of an in-flight animated scroll
    target: Option<u32>,
    smooth: bool,
    /// Each animation step covers `1 / divisor` of the remaining distance
    divisor: u32,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(true, 3)
    }
}

impl CarouselState {
    pub fn new(smooth: bool, divisor: u16) -> Self {
        Self {
            active: MetricCategory::default(),
            offset: 0,
            viewport_width: 0,
            target: None,
            smooth,
            divisor: u32::from(divisor.max(1)),
        }
    }

    pub fn active(&self) -> MetricCategory {
        self.active
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Offset at which the last slide is fully visible
    pub fn max_offset(&self) -> u32 {
        let slides = MetricCategory::ALL.len() as u32;
        (slides - 1) * u32::from(self.viewport_width)
    }

    /// Handle a scroll-position change
    ///
    /// Returns `true` when the active category changed.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        self.offset = offset.min(self.max_offset());
        match category_at_offset(self.offset, self.viewport_width) {
            Some(category) if category != self.active => {
                self.active = category;
                true
            }
            _ => false,
        }
    }

    /// Select a category directly and scroll its slide into view
    ///
    /// Selecting the already-active category again leaves the state as is.
    pub fn select(&mut self, category: MetricCategory) {
        let target = category.index() as u32 * u32::from(self.viewport_width);
        self.active = category;

        if !self.smooth || self.offset == target {
            self.offset = target;
            self.target = None;
        } else {
            self.target = Some(target);
        }
    }

    /// Scroll by `delta` columns (negative scrolls left)
    ///
    /// Cancels any in-flight animation. Returns `true` when the active
    /// category changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.target = None;
        let next = (i64::from(self.offset) + i64::from(delta)).max(0);
        self.on_scroll(u32::try_from(next).unwrap_or(u32::MAX))
    }

    /// Advance an in-flight animation by one frame
    ///
    /// Returns `true` while the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let remaining = target.abs_diff(self.offset);
        let step = remaining.div_ceil(self.divisor).max(1);
        self.offset = if target > self.offset {
            self.offset + step
        } else {
            self.offset - step
        };

        if self.offset == target {
            self.target = None;
            self.on_scroll(target);
        }
        true
    }

    /// Record the rendered viewport width, re-snapping to the active slide
    pub fn set_viewport_width(&mut self, width: u16) {
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        self.target = None;
        self.offset = self.active.index() as u32 * u32::from(width);
    }
}
