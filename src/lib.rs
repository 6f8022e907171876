//! devperf-dash Library
//!
//! A terminal dashboard for device performance test results. The binary
//! wires CLI arguments into [`Settings`] and hands off to the TUI or the
//! headless runner.

pub mod headless;

use std::path::{Path, PathBuf};

use devperf_app::config::{self, Settings};
use devperf_core::prelude::*;

pub use headless::runner::run_headless;

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub count: Option<usize>,
}

/// Load settings from `--config` (or the default location) and apply
/// CLI overrides
pub fn resolve_settings(overrides: &Overrides) -> Settings {
    let mut settings = match overrides.config.clone().or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available, using default settings");
            Settings::default()
        }
    };

    if let Some(seed) = overrides.seed {
        settings.fixture.seed = Some(seed);
    }
    if let Some(count) = overrides.count {
        settings.fixture.count = count;
    }
    settings
}

/// Write the commented default config to `--config` (or the default
/// location) unless a file is already there
///
/// Returns the path and whether a new file was written.
pub fn init_config(config: Option<PathBuf>) -> Result<(PathBuf, bool)> {
    let path = config
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory available, pass --config PATH"))?;
    let created = config::init_config_file(&path)?;
    Ok((path, created))
}

/// Shared startup: error reporting and file logging
fn init(mode: &str, config: Option<&Path>) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the terminal owns stdout)
    devperf_core::logging::init()?;

    info!("Mode: {}", mode);
    if let Some(path) = config {
        info!("Config: {}", path.display());
    }
    Ok(())
}

/// Run the terminal dashboard
pub async fn run(overrides: Overrides) -> Result<()> {
    init("tui", overrides.config.as_deref())?;
    let settings = resolve_settings(&overrides);

    let result = devperf_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("devperf dashboard exiting");
    result
}

/// Run the headless NDJSON dashboard
pub async fn run_headless_mode(overrides: Overrides) -> Result<()> {
    init("headless", overrides.config.as_deref())?;
    let settings = resolve_settings(&overrides);

    let result = run_headless(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Err(emit_err) = headless::HeadlessEvent::error(e.to_string(), e.is_fatal()).emit() {
            error!("Could not report error on stdout: {}", emit_err);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_overrides_replace_file_values() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fixture]\ncount = 40\nseed = 1\n").expect("write config");

        let settings = resolve_settings(&Overrides {
            config: Some(path.clone()),
            seed: Some(7),
            count: None,
        });
        assert_eq!(settings.fixture.count, 40);
        assert_eq!(settings.fixture.seed, Some(7));

        let settings = resolve_settings(&Overrides {
            config: Some(path),
            seed: None,
            count: Some(12),
        });
        assert_eq!(settings.fixture.count, 12);
        assert_eq!(settings.fixture.seed, Some(1));
    }

    #[test]
    fn test_init_config_writes_loadable_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("devperf").join("config.toml");

        let (written, created) = init_config(Some(path.clone())).expect("init config");
        assert_eq!(written, path);
        assert!(created);
        assert!(path.exists());

        let settings = resolve_settings(&Overrides {
            config: Some(path.clone()),
            ..Overrides::default()
        });
        assert_eq!(settings, Settings::default());

        let (_, created) = init_config(Some(path)).expect("second init");
        assert!(!created);
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let settings = resolve_settings(&Overrides {
            config: Some(dir.path().join("absent.toml")),
            ..Overrides::default()
        });
        assert_eq!(settings, Settings::default());
    }
}
