//! Configuration types for the dashboard
//!
//! Defines `Settings` and its sections. Every field has a default so a
//! partial `config.toml` only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::state::Tab;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub fixture: FixtureSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Synthetic fleet generation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FixtureSettings {
    /// Number of device records generated at startup
    #[serde(default = "default_count")]
    pub count: usize,

    /// Seed for reproducible fixtures (random when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
        }
    }
}

fn default_count() -> usize {
    devperf_core::FIXTURE_COUNT
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Animate click-driven carousel scrolls
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,

    /// Columns moved per manual carousel scroll
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,

    /// Each animation frame covers 1/N of the remaining distance
    #[serde(default = "default_animation_divisor")]
    pub animation_divisor: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            scroll_step: default_scroll_step(),
            animation_divisor: default_animation_divisor(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_scroll_step() -> u16 {
    4
}

fn default_animation_divisor() -> u16 {
    3
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Tab shown at startup
    #[serde(default)]
    pub start_tab: Tab,
}
