//! Game state - the value the controller replaces on restart
//!
//! A `GameState` is built whole by a constructor and then mutated only by
//! [`Game`](crate::game::Game). Restarting never resets fields one by one; it
//! swaps in a freshly constructed value.

use crate::board::Board;
use crate::piece::Tetromino;
use crate::pieces::PieceShape;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_points};
use crate::types::{LockEvent, PieceKind, BASE_FALL_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current: Tetromino,
    pub(crate) next: PieceKind,
    pub(crate) score: u32,
    pub(crate) lines: u32,
    pub(crate) level: u32,
    pub(crate) fall_interval_ms: u32,
    /// Time accumulated toward the next gravity step.
    pub(crate) fall_timer_ms: u32,
    pub(crate) game_over: bool,
    /// Last lock event (consumed by observers).
    pub(crate) last_event: Option<LockEvent>,
}

impl GameState {
    /// Fresh game: empty board, `current` at the spawn position, `next`
    /// waiting in the preview.
    pub fn new(current: PieceKind, next: PieceKind) -> Self {
        Self::from_parts(Board::new(), Tetromino::spawn(current), next)
    }

    /// Game at level 1 with a prepared board and piece.
    ///
    /// Used to set up scenarios and replays. If `current` does not fit on
    /// `board` the state starts out game over.
    pub fn from_parts(board: Board, current: Tetromino, next: PieceKind) -> Self {
        let game_over = !board.is_valid_position(&current.cells());
        Self {
            board,
            current,
            next,
            score: 0,
            lines: 0,
            level: 1,
            fall_interval_ms: BASE_FALL_MS,
            fall_timer_ms: 0,
            game_over,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Tetromino {
        self.current
    }

    pub fn current_cells(&self) -> PieceShape {
        self.current.cells()
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Whether `piece` fits on the current board
    pub fn fits(&self, piece: &Tetromino) -> bool {
        self.board.is_valid_position(&piece.cells())
    }

    /// Apply the scoring rules for one lock that cleared `cleared` rows.
    ///
    /// Points use the level before the update; lines, level and fall
    /// interval are then recomputed.
    pub(crate) fn record_lock(&mut self, cleared: u32) -> LockEvent {
        let points = line_clear_points(cleared, self.level);
        let previous_level = self.level;

        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        self.level = level_for_lines(self.lines);
        self.fall_interval_ms = fall_interval_ms(self.level);

        let event = LockEvent {
            lines_cleared: cleared,
            points,
            level_up: self.level > previous_level,
        };
        self.last_event = Some(event);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(PieceKind::T, PieceKind::I);
        assert_eq!(state.current, Tetromino::spawn(PieceKind::T));
        assert_eq!(state.next, PieceKind::I);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.fall_interval_ms, 500);
        assert!(!state.game_over);
        assert!(state.last_event.is_none());
    }

    #[test]
    fn test_spawn_on_empty_board_is_valid_for_every_kind() {
        for kind in PieceKind::ALL {
            let state = GameState::new(kind, PieceKind::O);
            assert!(!state.game_over(), "{:?}", kind);
        }
    }

    #[test]
    fn test_from_parts_blocked_spawn_is_game_over() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::Z));
        let state = GameState::from_parts(board, Tetromino::spawn(PieceKind::T), PieceKind::O);
        assert!(state.game_over());
    }

    #[test]
    fn test_record_lock_uses_level_before_update() {
        let mut state = GameState::new(PieceKind::I, PieceKind::I);
        state.lines = 8;

        let event = state.record_lock(2);
        assert_eq!(event.points, 100);
        assert!(event.level_up);
        assert_eq!(state.level, 2);
        assert_eq!(state.fall_interval_ms, 450);

        let event = state.record_lock(1);
        assert_eq!(event.points, 80);
        assert!(!event.level_up);
        assert_eq!(state.score, 180);
    }

    #[test]
    fn test_record_lock_without_clear() {
        let mut state = GameState::new(PieceKind::I, PieceKind::I);
        let event = state.record_lock(0);
        assert_eq!(
            event,
            LockEvent {
                lines_cleared: 0,
                points: 0,
                level_up: false
            }
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_level_floor_after_hundred_lines() {
        let mut state = GameState::new(PieceKind::I, PieceKind::I);
        for _ in 0..25 {
            state.record_lock(4);
        }
        assert_eq!(state.lines, 100);
        assert_eq!(state.level, 11);
        assert_eq!(state.fall_interval_ms, 50);
    }
}
