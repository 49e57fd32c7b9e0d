//! Piece sources - where the next tetromino comes from
//!
//! The controller never touches a global RNG. It draws from a
//! [`PieceSource`] handed to it at construction:
//!
//! - [`RandomPieces`]: independent uniform draws over the 7 kinds (no bag),
//!   backed by any `rand::Rng`. Seeded for reproducible games.
//! - [`FixedPieces`]: a scripted sequence that repeats, for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplies piece kinds to the game controller.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}

/// Uniform, independent draws from an injected RNG
#[derive(Debug, Clone)]
pub struct RandomPieces<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPieces<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPieces<StdRng> {
    /// Deterministic sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PieceSource for RandomPieces<R> {
    fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Repeats a fixed sequence of pieces forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPieces {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl FixedPieces {
    /// Returns `None` for an empty sequence.
    pub fn new(sequence: impl Into<Vec<PieceKind>>) -> Option<Self> {
        let sequence = sequence.into();
        if sequence.is_empty() {
            return None;
        }
        Some(Self { sequence, index: 0 })
    }

    /// The same kind every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            sequence: vec![kind],
            index: 0,
        }
    }

    /// Number of pieces handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for FixedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.index % self.sequence.len()];
        self.index += 1;
        kind
    }
}
