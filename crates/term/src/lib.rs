//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] paints a [`core::GameSnapshot`]
//! into a [`FrameBuffer`] without touching the terminal, and
//! [`TerminalRenderer`] flushes framebuffers through crossterm, re-sending
//! only the cells that changed.
//!
//! Board cells are drawn 2 columns wide by default so squares look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
