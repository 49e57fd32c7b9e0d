//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press is one command; there is no auto-repeat handling beyond what the
//! terminal itself sends.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit, CONTROLS};
