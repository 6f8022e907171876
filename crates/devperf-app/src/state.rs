//! Application state (Model in TEA pattern)
//!
//! `AppState` holds only the minimal mutable state: filters, page, the
//! compared device, tab, focus and cursor positions. Everything shown on
//! screen (filtered rows, the visible page, the projection) is derived from
//! it on demand.

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselState;
use crate::config::Settings;
use devperf_core::{
    clamp_page, generate_devices, generate_devices_seeded, paginate, project, total_pages,
    DeviceRecord, Filters, ModeFilter, OsFilter, Projection, TierFilter, PAGE_SIZE,
};

/// Current application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Top-level tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Placeholder tab with no distinct content
    Overview,
    #[default]
    Details,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "概览",
            Tab::Details => "设备详情",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Details => "details",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "overview" => Some(Tab::Overview),
            "details" => Some(Tab::Details),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Tab::Overview => Tab::Details,
            Tab::Details => Tab::Overview,
        }
    }
}

/// Which panel of the Details tab receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Filters,
    Scores,
    #[default]
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Filters => Focus::Scores,
            Focus::Scores => Focus::Table,
            Focus::Table => Focus::Filters,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Filters => Focus::Table,
            Focus::Scores => Focus::Filters,
            Focus::Table => Focus::Scores,
        }
    }
}

/// Filter row under the cursor when the filter panel is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterRow {
    #[default]
    Tier,
    Os,
    Mode,
}

impl FilterRow {
    pub fn up(self) -> Self {
        match self {
            FilterRow::Tier => FilterRow::Tier,
            FilterRow::Os => FilterRow::Tier,
            FilterRow::Mode => FilterRow::Os,
        }
    }

    pub fn down(self) -> Self {
        match self {
            FilterRow::Tier => FilterRow::Os,
            FilterRow::Os => FilterRow::Mode,
            FilterRow::Mode => FilterRow::Mode,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Fixture set, generated once at session start
    records: Vec<DeviceRecord>,

    /// Active filter selections
    filters: Filters,

    /// Current 1-based table page
    page: usize,

    /// Index into `records` of the compared device
    selection: Option<usize>,

    pub active_tab: Tab,
    pub focus: Focus,
    pub filter_row: FilterRow,

    /// Cursor row within the visible page
    table_cursor: usize,

    /// Score navigation / metric carousel sync state
    pub carousel: CarouselState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState, generating the fixture set from settings
    pub fn with_settings(settings: Settings) -> Self {
        let records = match settings.fixture.seed {
            Some(seed) => generate_devices_seeded(settings.fixture.count, seed),
            None => generate_devices(settings.fixture.count),
        };
        Self::with_records(records, settings)
    }

    /// Create a new AppState over an existing fixture set
    pub fn with_records(records: Vec<DeviceRecord>, settings: Settings) -> Self {
        let carousel = CarouselState::new(settings.ui.smooth_scroll, settings.ui.animation_divisor);
        Self {
            phase: AppPhase::Running,
            active_tab: settings.behavior.start_tab,
            settings,
            records,
            filters: Filters::default(),
            page: 1,
            selection: None,
            focus: Focus::default(),
            filter_row: FilterRow::default(),
            table_cursor: 0,
            carousel,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Derived State
    // ─────────────────────────────────────────────────────────

    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    pub fn filters(&self) -> Filters {
        self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn table_cursor(&self) -> usize {
        self.table_cursor
    }

    /// Indices into `records` that pass the active filters
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.filters.matching_indices(&self.records)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), PAGE_SIZE)
    }

    /// Record indices shown on the current page
    pub fn visible_indices(&self) -> Vec<usize> {
        let filtered = self.filtered_indices();
        let (page, _) = paginate(&filtered, self.page, PAGE_SIZE);
        page.to_vec()
    }

    /// Records shown on the current page
    pub fn visible_records(&self) -> Vec<&DeviceRecord> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Record index under the table cursor
    pub fn cursor_record_index(&self) -> Option<usize> {
        self.visible_indices().get(self.table_cursor).copied()
    }

    pub fn selection_index(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_record(&self) -> Option<&DeviceRecord> {
        self.selection.and_then(|i| self.records.get(i))
    }

    /// Scores and metric cards for the compared device (or averages)
    pub fn projection(&self) -> Projection {
        project(self.selected_record())
    }

    // ─────────────────────────────────────────────────────────
    // Filter Helpers
    // ─────────────────────────────────────────────────────────

    pub fn set_tier_filter(&mut self, tier: TierFilter) {
        self.set_filters(Filters { tier, ..self.filters });
    }

    pub fn set_os_filter(&mut self, os: OsFilter) {
        self.set_filters(Filters { os, ..self.filters });
    }

    pub fn set_mode_filter(&mut self, mode: ModeFilter) {
        self.set_filters(Filters { mode, ..self.filters });
    }

    /// Replace the filters; any change returns the table to page 1
    fn set_filters(&mut self, filters: Filters) {
        if filters == self.filters {
            return;
        }
        self.filters = filters;
        self.page = 1;
        self.table_cursor = 0;
    }

    // ─────────────────────────────────────────────────────────
    // Pagination Helpers
    // ─────────────────────────────────────────────────────────

    /// Jump to a page, clamped into `[1, max(1, total_pages)]`
    pub fn go_to_page(&mut self, page: usize) {
        let page = clamp_page(page, self.total_pages());
        if page != self.page {
            self.page = page;
            self.table_cursor = 0;
        }
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.go_to_page(self.page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.go_to_page(self.page - 1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Table Helpers
    // ─────────────────────────────────────────────────────────

    pub fn cursor_up(&mut self) {
        self.table_cursor = self.table_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let rows = self.visible_indices().len();
        if self.table_cursor + 1 < rows {
            self.table_cursor += 1;
        }
    }

    /// Compare the device at a record index
    ///
    /// Returns `false` when the index is out of range.
    pub fn compare(&mut self, record_index: usize) -> bool {
        if record_index >= self.records.len() {
            return false;
        }
        self.selection = Some(record_index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}
