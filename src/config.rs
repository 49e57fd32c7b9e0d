//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::types::TICK_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockdrop", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// Seed for the piece generator; omit for a random game
    #[arg(long, env = "BLOCKDROP_SEED")]
    pub seed: Option<u64>,

    /// Main loop period in milliseconds
    #[arg(long, env = "BLOCKDROP_TICK_MS", default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Terminal columns per board cell (1-4)
    #[arg(long, env = "BLOCKDROP_CELL_WIDTH", default_value_t = 2)]
    pub cell_width: u16,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "BLOCKDROP_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Maximum log level: error, warn, info, debug or trace
    #[arg(long, env = "BLOCKDROP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick interval must be at least 1 ms")]
    ZeroTick,

    #[error("cell width must be between 1 and 4, got {0}")]
    CellWidth(u16),

    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("cannot open log file {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub tick: Duration,
    pub cell_width: u16,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if !(1..=4).contains(&cli.cell_width) {
            return Err(ConfigError::CellWidth(cli.cell_width));
        }
        let log_level = cli
            .log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(cli.log_level.clone()))?;

        Ok(Self {
            seed: cli.seed,
            tick: Duration::from_millis(u64::from(cli.tick_ms)),
            cell_width: cli.cell_width,
            log_file: cli.log_file,
            log_level,
        })
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick.as_millis() as u32
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick: Duration::from_millis(u64::from(TICK_MS)),
            cell_width: 2,
            log_file: None,
            log_level: Level::INFO,
        }
    }
}
