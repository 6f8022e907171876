//! devperf - terminal dashboard for device performance test results
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use devperf_core::prelude::*;
use devperf_dash::Overrides;

/// devperf - device performance dashboard
#[derive(Parser, Debug)]
#[command(name = "devperf")]
#[command(about = "A terminal dashboard for device performance test results", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for reproducible device fixtures
    #[arg(long)]
    seed: Option<u64>,

    /// Number of generated devices
    #[arg(long)]
    count: Option<usize>,

    /// Run in headless mode (stdin commands, JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a commented default config.toml and exit
    #[arg(long, conflicts_with = "headless")]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let (path, created) = devperf_dash::init_config(args.config)?;
        if created {
            println!("Created {}", path.display());
        } else {
            println!("{} already exists, left unchanged", path.display());
        }
        return Ok(());
    }

    let overrides = Overrides {
        config: args.config,
        seed: args.seed,
        count: args.count,
    };

    if args.headless {
        devperf_dash::run_headless_mode(overrides).await
    } else {
        devperf_dash::run(overrides).await
    }
}
