//! # devperf-core - Core Domain Types
//!
//! Foundation crate for the device performance dashboard. Provides domain
//! types, error handling, logging setup, and the pure derived-state
//! pipeline: fixtures → filter → paginate, plus the category projection.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, rand).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DeviceRecord`] - A test device with display strings, scores and raw metrics
//! - [`Tier`] - Device performance class (High, Mid, Low)
//! - [`MetricCategory`] - Startup, Runtime, Network, Compatibility
//! - [`Scores`], [`DetailedMetrics`] - Per-category scores and sub-measurements
//!
//! ### Fixtures (`fixture`)
//! - [`generate_devices()`], [`generate_devices_seeded()`] - Synthetic fleet
//!
//! ### Filtering (`filter`)
//! - [`filter_records()`] - Tier/OS/mode filter engine
//! - [`Filters`], [`TierFilter`], [`OsFilter`], [`ModeFilter`]
//!
//! ### Pagination (`pagination`)
//! - [`paginate()`], [`clamp_page()`], [`item_range()`], [`PAGE_SIZE`]
//!
//! ### Projection (`projection`)
//! - [`project()`] - Selection (or averages) → per-category view model
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use devperf_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod fixture;
pub mod logging;
pub mod pagination;
pub mod prelude;
pub mod projection;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use filter::{filter_records, Filters, ModeFilter, OsFilter, TierFilter};
pub use fixture::{
    generate_devices, generate_devices_seeded, generate_devices_with, DeviceModel,
    DEVICE_CATALOG, FIXTURE_COUNT,
};
pub use pagination::{clamp_page, item_range, paginate, total_pages, PAGE_SIZE};
pub use projection::{
    metric_definitions, project, CategoryView, MetricDefinition, MetricView, Projection,
    AVERAGE_METRICS, AVERAGE_SCORES,
};
pub use types::{
    CompatibilityMetrics, DetailedMetrics, DeviceRecord, MetricCategory, NetworkMetrics,
    RuntimeMetrics, Scores, StartupMetrics, Tier,
};
