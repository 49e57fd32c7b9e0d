//! Blockdrop (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `blockdrop::{core,input,term,types}` and owns the runtime
//! configuration used by the binary.

pub mod config;
pub mod logging;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;

pub use config::{Cli, Config, ConfigError};
