//! Piece catalog - tetromino rotation masks
//!
//! Each shape lists its rotation states as 4x4 masks, cycled by index modulo
//! the number of states. There is no kick table: a rotation either fits in
//! place or is refused.

use crate::types::{PieceKind, Rgb};

/// Side length of the square box every mask is drawn in
pub const MASK_SIZE: usize = 4;

/// Offset of a single mino relative to the piece box origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the box origin
pub type PieceShape = [MinoOffset; 4];

/// A 4x4 grid of filled flags, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask([[bool; MASK_SIZE]; MASK_SIZE]);

impl Mask {
    /// Build a mask from four rows of `#` (filled) and `.` (empty).
    const fn parse(rows: [&str; MASK_SIZE]) -> Self {
        let mut grid = [[false; MASK_SIZE]; MASK_SIZE];
        let mut y = 0;
        while y < MASK_SIZE {
            let bytes = rows[y].as_bytes();
            let mut x = 0;
            while x < MASK_SIZE {
                grid[y][x] = bytes[x] == b'#';
                x += 1;
            }
            y += 1;
        }
        Self(grid)
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < MASK_SIZE && col < MASK_SIZE && self.0[row][col]
    }

    /// Number of filled cells (4 for every catalog entry).
    pub fn filled_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&filled| filled).count()
    }

    /// Filled cells as (col, row) offsets, in row-major order.
    pub fn offsets(&self) -> PieceShape {
        let mut out = [(0, 0); 4];
        let mut n = 0;
        for (row, cols) in self.0.iter().enumerate() {
            for (col, &filled) in cols.iter().enumerate() {
                if filled && n < out.len() {
                    out[n] = (col as i8, row as i8);
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 4, "catalog masks hold exactly four minos");
        out
    }

    /// Rows of filled flags, top to bottom, for previews.
    pub fn rows(&self) -> impl Iterator<Item = [bool; MASK_SIZE]> + '_ {
        self.0.iter().copied()
    }
}

/// Immutable catalog entry
#[derive(Debug)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub rotations: &'static [Mask],
    pub color: Rgb,
}

const I_ROTATIONS: [Mask; 4] = [
    Mask::parse(["....", "####", "....", "...."]),
    Mask::parse(["..#.", "..#.", "..#.", "..#."]),
    Mask::parse(["....", "####", "....", "...."]),
    Mask::parse(["..#.", "..#.", "..#.", "..#."]),
];

const O_ROTATIONS: [Mask; 1] = [Mask::parse(["....", ".##.", ".##.", "...."])];

const T_ROTATIONS: [Mask; 4] = [
    Mask::parse(["....", ".#..", "###.", "...."]),
    Mask::parse(["....", ".#..", ".##.", ".#.."]),
    Mask::parse(["....", "....", "###.", ".#.."]),
    Mask::parse(["....", ".#..", "##..", ".#.."]),
];

const S_ROTATIONS: [Mask; 2] = [
    Mask::parse(["....", ".##.", "##..", "...."]),
    Mask::parse(["....", ".#..", ".##.", "..#."]),
];

const Z_ROTATIONS: [Mask; 2] = [
    Mask::parse(["....", "##..", ".##.", "...."]),
    Mask::parse(["....", "..#.", ".##.", ".#.."]),
];

const J_ROTATIONS: [Mask; 4] = [
    Mask::parse(["....", ".#..", ".###", "...."]),
    Mask::parse(["....", "..##", "..#.", "..#."]),
    Mask::parse(["....", "....", "###.", "..#."]),
    Mask::parse(["....", ".#..", ".#..", "##.."]),
];

const L_ROTATIONS: [Mask; 4] = [
    Mask::parse(["....", "..#.", "###.", "...."]),
    Mask::parse(["....", ".#..", ".#..", ".##."]),
    Mask::parse(["....", "....", "###.", "#..."]),
    Mask::parse(["....", "##..", ".#..", ".#.."]),
];

/// Catalog indexed by [`PieceKind::index`].
static CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        rotations: &I_ROTATIONS,
        color: PieceKind::I.color(),
    },
    PieceDef {
        kind: PieceKind::O,
        rotations: &O_ROTATIONS,
        color: PieceKind::O.color(),
    },
    PieceDef {
        kind: PieceKind::T,
        rotations: &T_ROTATIONS,
        color: PieceKind::T.color(),
    },
    PieceDef {
        kind: PieceKind::S,
        rotations: &S_ROTATIONS,
        color: PieceKind::S.color(),
    },
    PieceDef {
        kind: PieceKind::Z,
        rotations: &Z_ROTATIONS,
        color: PieceKind::Z.color(),
    },
    PieceDef {
        kind: PieceKind::J,
        rotations: &J_ROTATIONS,
        color: PieceKind::J.color(),
    },
    PieceDef {
        kind: PieceKind::L,
        rotations: &L_ROTATIONS,
        color: PieceKind::L.color(),
    },
];

/// Catalog entry for a piece kind
pub fn definition(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Number of rotation states (1, 2 or 4)
pub fn rotation_count(kind: PieceKind) -> usize {
    definition(kind).rotations.len()
}

/// Mask for a rotation index, wrapped modulo the rotation count
pub fn mask(kind: PieceKind, rotation: usize) -> &'static Mask {
    let rotations = definition(kind).rotations;
    &rotations[rotation % rotations.len()]
}

/// Mino offsets for a piece kind and rotation index
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    mask(kind, rotation).offsets()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mask_has_four_minos() {
        for kind in PieceKind::ALL {
            for (i, m) in definition(kind).rotations.iter().enumerate() {
                assert_eq!(m.filled_count(), 4, "{:?} rotation {}", kind, i);
            }
        }
    }

    #[test]
    fn catalog_is_indexed_by_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(definition(kind).kind, kind);
            assert_eq!(definition(kind).color, kind.color());
        }
    }

    #[test]
    fn rotation_counts() {
        assert_eq!(rotation_count(PieceKind::I), 4);
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn mask_index_wraps() {
        assert_eq!(mask(PieceKind::T, 4), mask(PieceKind::T, 0));
        assert_eq!(mask(PieceKind::O, 3), mask(PieceKind::O, 0));
        assert_eq!(mask(PieceKind::S, 3), mask(PieceKind::S, 1));
    }

    #[test]
    fn parsed_shapes() {
        assert_eq!(
            get_shape(PieceKind::I, 0),
            [(0, 1), (1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(
            get_shape(PieceKind::O, 0),
            [(1, 1), (2, 1), (1, 2), (2, 2)]
        );
        assert_eq!(
            get_shape(PieceKind::L, 2),
            [(0, 2), (1, 2), (2, 2), (0, 3)]
        );
    }

    #[test]
    fn is_filled_outside_box_is_false() {
        let m = mask(PieceKind::I, 0);
        assert!(m.is_filled(0, 1));
        assert!(!m.is_filled(4, 1));
        assert!(!m.is_filled(0, 4));
    }
}
