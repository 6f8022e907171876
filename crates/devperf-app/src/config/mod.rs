//! Configuration file parsing for the dashboard
//!
//! Supports a single `config.toml`, found via `--config` or under the
//! platform config directory.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
