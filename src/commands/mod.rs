// Command handlers module
pub mod config;
pub mod run;
pub mod send;
pub mod version;

use anyhow::Result;
use clap::ArgMatches;
use std::path::PathBuf;

use crate::core::MonitorConfig;

// Re-exports for cleaner imports
pub use version::execute as version;

/// Load the config named by `--config`, or the default one
pub fn load_config(matches: &ArgMatches) -> Result<MonitorConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => MonitorConfig::load_from(path),
        None => MonitorConfig::load(),
    }
}
