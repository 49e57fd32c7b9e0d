//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds all the rules: the piece catalog, the board, scoring and
//! the game controller. It does no I/O and draws no pixels; a presentation
//! layer calls the commands and reads [`GameSnapshot`] to draw.
//!
//! - **Deterministic**: the piece source is injected, so a seeded or scripted
//!   source replays the same game
//! - **Zero-allocation hot paths**: board and pieces are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`pieces`]: the 7 tetrominoes as 4x4 rotation masks
//! - [`piece`]: the falling [`Tetromino`]
//! - [`board`]: 10x20 grid with collision checks and line clearing
//! - [`scoring`]: line clear points, levels and fall speed
//! - [`rng`]: [`PieceSource`] and its random and scripted implementations
//! - [`game_state`]: the [`GameState`] value
//! - [`game`]: the [`Game`] controller
//! - [`snapshot`]: copyable frame data for renderers
//!
//! # Game Rules
//!
//! - **Uniform random pieces**: every draw is independent (no 7-bag)
//! - **Fixed rotation**: rotation states cycle in place; no wall kicks
//! - **Instant lock**: a piece locks as soon as a downward step fails
//! - **Scoring**: 40/100/300/1200 times the level, 2 points per hard-dropped row
//! - **Levels**: one per 10 lines; gravity 500ms at level 1, 50ms faster
//!   per level, never below 50ms
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{FixedPieces, Game};
//! use blockdrop_types::{GameAction, PieceKind};
//!
//! let mut game = Game::new(FixedPieces::repeat(PieceKind::O));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.score(), 34); // 17 rows, 2 points each
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`] every frame with the elapsed milliseconds. Gravity
//! fires once the accumulated time reaches the fall interval, and the
//! accumulator restarts from zero.

pub mod board;
pub mod game;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game::Game;
pub use game_state::GameState;
pub use piece::Tetromino;
pub use pieces::{get_shape, mask, rotation_count, Mask, PieceShape};
pub use rng::{FixedPieces, PieceSource, RandomPieces};
pub use scoring::{fall_interval_ms, hard_drop_points, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
