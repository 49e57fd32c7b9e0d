//! Game controller - the piece/board state machine
//!
//! [`Game`] owns the [`GameState`] and the [`PieceSource`] and runs every
//! transition: moves, rotation, gravity, locking, line clears and spawning.
//!
//! There are two states. While running, the current piece always fits the
//! board. Once a freshly spawned piece does not fit, the game is over and
//! every command except [`Game::restart`] is a no-op.

use crate::piece::Tetromino;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::hard_drop_points;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::game_state::GameState;
use crate::types::{GameAction, LockEvent};

#[derive(Debug, Clone)]
pub struct Game<S = RandomPieces> {
    state: GameState,
    source: S,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl<S: PieceSource> Game<S> {
    /// Start a game, drawing the current and next pieces from `source`
    pub fn new(mut source: S) -> Self {
        let state = Self::fresh_state(&mut source);
        Self {
            state,
            source,
            episode_id: 0,
        }
    }

    /// Resume from a prepared state (scenarios, replays)
    pub fn from_state(state: GameState, source: S) -> Self {
        Self {
            state,
            source,
            episode_id: 0,
        }
    }

    fn fresh_state(source: &mut S) -> GameState {
        let current = source.next_piece();
        let next = source.next_piece();
        GameState::new(current, next)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lines(&self) -> u32 {
        self.state.lines
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn current(&self) -> Tetromino {
        self.state.current
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.state.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let state = &self.state;
        state.board.write_grid(&mut out.board);
        out.active = if state.game_over {
            None
        } else {
            Some(ActiveSnapshot::from(state.current))
        };
        out.next = state.next;
        out.score = state.score;
        out.lines = state.lines;
        out.level = state.level;
        out.fall_interval_ms = state.fall_interval_ms;
        out.game_over = state.game_over;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the preview piece and draw a new one.
    ///
    /// Ends the game if the promoted piece does not fit at the spawn position.
    pub fn spawn_next(&mut self) {
        if self.state.game_over {
            return;
        }

        let piece = Tetromino::spawn(self.state.next);
        self.state.current = piece;
        self.state.next = self.source.next_piece();

        if !self.state.fits(&piece) {
            self.state.game_over = true;
            tracing::info!(
                score = self.state.score,
                lines = self.state.lines,
                level = self.state.level,
                "game over"
            );
        }
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.state.game_over {
            return false;
        }

        let Some(candidate) = self.state.current.checked_shift(dx, dy) else {
            return false;
        };
        if !self.state.fits(&candidate) {
            return false;
        }
        self.state.current = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate in place to the next rotation state.
    ///
    /// No kicks: if the rotated piece does not fit where it is, nothing
    /// changes.
    pub fn rotate(&mut self) -> bool {
        if self.state.game_over {
            return false;
        }

        let candidate = self.state.current.rotated();
        if candidate == self.state.current || !self.state.fits(&candidate) {
            return false;
        }
        self.state.current = candidate;
        true
    }

    /// Move down one row, locking the piece if it cannot move.
    ///
    /// Returns true if the piece moved, false if it locked (or the game is
    /// over).
    pub fn soft_drop(&mut self) -> bool {
        if self.state.game_over {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Drop the piece to its resting row and lock it.
    ///
    /// Awards 2 points per row descended. Returns the rows descended.
    pub fn hard_drop(&mut self) -> u32 {
        if self.state.game_over {
            return 0;
        }

        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.state.score = self.state.score.saturating_add(hard_drop_points(rows));

        self.lock_piece();
        rows
    }

    /// Advance the gravity timer.
    ///
    /// Once the accumulated time reaches the fall interval, runs one
    /// [`soft_drop`](Self::soft_drop) and resets the accumulator to zero.
    /// Returns true when a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.state.game_over {
            return false;
        }

        self.state.fall_timer_ms = self.state.fall_timer_ms.saturating_add(elapsed_ms);
        if self.state.fall_timer_ms < self.state.fall_interval_ms {
            return false;
        }

        self.soft_drop();
        self.state.fall_timer_ms = 0;
        true
    }

    /// Throw the current game away and start a new one.
    pub fn restart(&mut self) {
        self.state = Self::fresh_state(&mut self.source);
        self.episode_id = self.episode_id.wrapping_add(1);
        tracing::info!(episode = self.episode_id, "game restarted");
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if self.state.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Write the piece into the board, clear lines, score, spawn the next one.
    fn lock_piece(&mut self) {
        let piece = self.state.current;
        let cells = piece.cells();

        let written = self.state.board.place(&cells, piece.kind);
        if written < cells.len() {
            tracing::debug!(
                kind = piece.kind.as_str(),
                dropped = cells.len() - written,
                "piece locked partly above the board"
            );
        }

        let cleared = self.state.board.clear_full_lines();
        let event = self.state.record_lock(cleared.len() as u32);
        tracing::debug!(
            kind = piece.kind.as_str(),
            rows = ?cleared.as_slice(),
            points = event.points,
            score = self.state.score,
            "piece locked"
        );
        if event.level_up {
            tracing::info!(
                level = self.state.level,
                fall_interval_ms = self.state.fall_interval_ms,
                "level up"
            );
        }

        self.spawn_next();
    }
}
