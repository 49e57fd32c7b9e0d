//! Log output setup.
//!
//! The terminal is owned by the game screen, so logs only go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use crate::config::{Config, ConfigError};

/// Install a file-backed `tracing` subscriber if a log file is configured.
///
/// Returns `Ok(false)` when logging stays off.
pub fn init(config: &Config) -> Result<bool, ConfigError> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.clone(),
            source,
        })?;

    // A subscriber may already be installed (tests); keep that one.
    let installed = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
