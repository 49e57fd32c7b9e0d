//! The falling piece.

use crate::pieces::{self, Mask, PieceShape, MASK_SIZE};
use crate::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

/// Active falling piece
///
/// `(x, y)` is the top-left corner of the 4x4 mask box. The piece itself is
/// a value: moves and rotations build a candidate with [`shifted`] or
/// [`rotated`], and the controller commits it only if the board accepts it.
///
/// [`shifted`]: Tetromino::shifted
/// [`rotated`]: Tetromino::rotated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position, rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn mask(&self) -> &'static Mask {
        pieces::mask(self.kind, self.rotation as usize)
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> PieceShape {
        self.mask()
            .offsets()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn rotation_count(&self) -> usize {
        pieces::rotation_count(self.kind)
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Like [`shifted`](Self::shifted), but `None` if the piece box would
    /// leave the `i8` coordinate range.
    pub fn checked_shift(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        let far = MASK_SIZE as i8 - 1;
        x.checked_add(far)?;
        y.checked_add(far)?;
        Some(Self { x, y, ..self })
    }

    /// Same position, next rotation state
    pub fn rotated(self) -> Self {
        let next = (self.rotation as usize + 1) % self.rotation_count();
        Self {
            rotation: next as u8,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_position() {
        let t = Tetromino::spawn(PieceKind::T);
        assert_eq!((t.x, t.y, t.rotation), (3, 0, 0));
        assert_eq!(t.cells(), [(4, 1), (3, 2), (4, 2), (5, 2)]);
    }

    #[test]
    fn shifted_moves_every_cell() {
        let t = Tetromino::spawn(PieceKind::O).shifted(-2, 5);
        assert_eq!(t.cells(), [(2, 6), (3, 6), (2, 7), (3, 7)]);
    }

    #[test]
    fn checked_shift_rejects_overflow() {
        let t = Tetromino::spawn(PieceKind::I);
        assert_eq!(t.checked_shift(1, 2), Some(t.shifted(1, 2)));
        assert_eq!(t.checked_shift(i8::MAX, 0), None);
        assert_eq!(t.shifted(0, -1).checked_shift(0, i8::MIN), None);
        // The box origin fits but its far corner would not.
        assert_eq!(t.checked_shift(122, 0), None);
        assert!(t.checked_shift(121, 0).is_some());
    }

    #[test]
    fn rotated_cycles_through_states() {
        let mut t = Tetromino::spawn(PieceKind::S);
        t = t.rotated();
        assert_eq!(t.rotation, 1);
        t = t.rotated();
        assert_eq!(t.rotation, 0);

        let o = Tetromino::spawn(PieceKind::O);
        assert_eq!(o.rotated(), o);
    }

    #[test]
    fn rotated_keeps_position() {
        let t = Tetromino::spawn(PieceKind::J).shifted(1, 3).rotated();
        assert_eq!((t.x, t.y), (4, 3));
    }
}
