//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON lines.

use crate::state::Tab;
use devperf_core::{Filters, MetricCategory};

/// Domain events emitted by the Engine for external consumers.
///
/// Events are broadcast after each message processing cycle, so subscribers
/// see a consistent view of state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Query
    // ─────────────────────────────────────────────────────────
    /// One or more filter selections changed
    FiltersChanged {
        filters: Filters,
        matching: usize,
    },

    /// The table moved to another page (or the page count changed)
    PageChanged { page: usize, total_pages: usize },

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// The compared device changed; `None` means fleet averages
    SelectionChanged {
        device_id: Option<String>,
        model: Option<String>,
    },

    /// The active score category changed
    CategoryChanged { category: MetricCategory },

    /// The visible tab changed
    TabChanged { tab: Tab },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type name for logging/serialization
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::FiltersChanged { .. } => "filters_changed",
            EngineEvent::PageChanged { .. } => "page_changed",
            EngineEvent::SelectionChanged { .. } => "selection_changed",
            EngineEvent::CategoryChanged { .. } => "category_changed",
            EngineEvent::TabChanged { .. } => "tab_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
