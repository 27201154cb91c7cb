//! File-backed logging.
//!
//! The terminal belongs to the UI, so log records go to ~/.binbucks/arcade.log.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use super::persistence::app_path;
use crate::error::Result;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub const LOG_FILE: &str = "arcade.log";

pub fn log_path() -> Result<PathBuf> {
    app_path(LOG_FILE)
}

/// Install the global logger, appending to `path`.
pub fn init(level: LevelFilter, path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    log::info!(
        "logging to {} at {}",
        path.display(),
        log::max_level().to_string().to_lowercase()
    );
    Ok(())
}
