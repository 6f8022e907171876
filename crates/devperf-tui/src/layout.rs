//! Screen layout definitions for the TUI
//!
//! The Details tab stacks header, filters, banner, score navigation, metric
//! carousel, device table and pagination footer. Terminals shorter than
//! [`FULL_HEIGHT`] get a single-line filter bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum height for the full (three-row) filter bar
pub const FULL_HEIGHT: u16 = 34;

/// Screen areas for the Details tab
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and tab switcher
    pub header: Rect,
    /// Tier / OS / mode filter rows
    pub filters: Rect,
    /// Current selection and scoring note
    pub banner: Rect,
    /// Four score navigation cards
    pub scores: Rect,
    /// Metric card carousel
    pub carousel: Rect,
    /// Device table
    pub table: Rect,
    /// Range text and page controls
    pub pagination: Rect,
    /// Whether the filter bar is collapsed to one line
    pub compact: bool,
}

/// Create the Details tab layout
pub fn create(area: Rect) -> ScreenAreas {
    let compact = area.height < FULL_HEIGHT;
    let filter_height = if compact { 3 } else { 5 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (glass container)
        Constraint::Length(filter_height), // Filters
        Constraint::Length(2),             // Banner (two text lines)
        Constraint::Length(4),             // Score cards
        Constraint::Length(6),             // Metric cards
        Constraint::Min(3),                // Table
        Constraint::Length(1),             // Pagination
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        filters: chunks[1],
        banner: chunks[2],
        scores: chunks[3],
        carousel: chunks[4],
        table: chunks[5],
        pagination: chunks[6],
        compact,
    }
}

/// Header + body layout for the Overview tab
pub fn create_overview(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);
    (chunks[0], chunks[1])
}
