//! Settings parser for config.toml

use super::types::Settings;
use devperf_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "devperf-dash";

/// Default config location: `<config_dir>/devperf-dash/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config if none exists yet
///
/// Returns `false` when a file was already there and was left untouched.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(false);
    }
    ensure_parent_dir(config_path)?;

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

fn ensure_parent_dir(config_path: &Path) -> Result<()> {
    match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e))),
        _ => Ok(()),
    }
}

fn generate_default_config() -> String {
    r#"# Device Performance Dashboard Configuration

[fixture]
count = 25              # Synthetic devices generated at startup
# seed = 42             # Uncomment for a reproducible fleet

[ui]
smooth_scroll = true    # Animate carousel scrolls on category select
scroll_step = 4         # Columns per manual carousel scroll
animation_divisor = 3   # Each frame covers 1/N of the remaining distance

[behavior]
start_tab = "details"   # "overview" or "details"
"#
    .to_string()
}
