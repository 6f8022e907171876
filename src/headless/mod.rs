//! Headless mode - JSON event output for scripting and E2E testing
//!
//! This module provides a headless (non-TUI) mode that reads line commands
//! from stdin and writes structured JSON events to stdout, so scripts can
//! drive the dashboard without parsing ANSI escape codes.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with
//! event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","devices":25,"page":1,"total_pages":3,"timestamp":1704700001000}
//! {"event":"filters_changed","filters":{"tier":"high","os":"all","mode":"high_perf"},"matching":9,"timestamp":1704700002000}
//! {"event":"page_changed","page":1,"total_pages":1,"timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};

use devperf_app::state::{AppState, Tab};
use devperf_app::EngineEvent;
use devperf_core::prelude::*;
use devperf_core::{CategoryView, Filters, MetricCategory, Tier};

/// One visible table row in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub id: String,
    pub os: String,
    pub model: String,
    pub tier: Tier,
    pub startup_time: String,
    pub is_slow: bool,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Fixture generated, commands accepted from now on
    Ready {
        devices: usize,
        page: usize,
        total_pages: usize,
        timestamp: i64,
    },

    FiltersChanged {
        filters: Filters,
        matching: usize,
        timestamp: i64,
    },

    PageChanged {
        page: usize,
        total_pages: usize,
        timestamp: i64,
    },

    /// Compared device changed; both fields are null for the averages
    SelectionChanged {
        device_id: Option<String>,
        model: Option<String>,
        timestamp: i64,
    },

    CategoryChanged {
        category: MetricCategory,
        timestamp: i64,
    },

    TabChanged { tab: Tab, timestamp: i64 },

    /// Full view of the dashboard, emitted on request
    Snapshot {
        tab: Tab,
        filters: Filters,
        matching: usize,
        page: usize,
        total_pages: usize,
        rows: Vec<SnapshotRow>,
        selection: Option<String>,
        category: MetricCategory,
        carousel_offset: u32,
        /// Score and metric cards of the active category
        active: CategoryView,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one NDJSON line
    pub fn emit(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }

    /// Serialize this event as a single line and flush the writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(writer, "{}", json).context("Failed to write headless event")?;
        writer.flush().context("Failed to flush headless output")?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(state: &AppState) -> Self {
        Self::Ready {
            devices: state.records().len(),
            page: state.page(),
            total_pages: state.total_pages(),
            timestamp: Self::now(),
        }
    }

    pub fn snapshot(state: &AppState) -> Self {
        let category = state.carousel.active();
        let active = state.projection().category(category).clone();
        let rows = state
            .visible_records()
            .into_iter()
            .map(|r| SnapshotRow {
                id: r.id.clone(),
                os: r.os.clone(),
                model: r.model.clone(),
                tier: r.tier,
                startup_time: r.startup_time.clone(),
                is_slow: r.is_slow,
            })
            .collect();

        Self::Snapshot {
            tab: state.active_tab,
            filters: state.filters(),
            matching: state.filtered_count(),
            page: state.page(),
            total_pages: state.total_pages(),
            rows,
            selection: state.selected_record().map(|r| r.id.clone()),
            category,
            carousel_offset: state.carousel.offset(),
            active,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event; `Shutdown` has no headless counterpart
    pub fn from_engine_event(event: EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::FiltersChanged { filters, matching } => Self::FiltersChanged {
                filters,
                matching,
                timestamp,
            },
            EngineEvent::PageChanged { page, total_pages } => Self::PageChanged {
                page,
                total_pages,
                timestamp,
            },
            EngineEvent::SelectionChanged { device_id, model } => Self::SelectionChanged {
                device_id,
                model,
                timestamp,
            },
            EngineEvent::CategoryChanged { category } => Self::CategoryChanged {
                category,
                timestamp,
            },
            EngineEvent::TabChanged { tab } => Self::TabChanged { tab, timestamp },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }
}
