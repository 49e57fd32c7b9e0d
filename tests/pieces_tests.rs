//! Piece catalog tests

use blockdrop::core::{get_shape, mask, rotation_count, Board, Tetromino};
use blockdrop::types::PieceKind;

#[test]
fn test_rotation_counts() {
    let expected = [
        (PieceKind::I, 4),
        (PieceKind::O, 1),
        (PieceKind::T, 4),
        (PieceKind::S, 2),
        (PieceKind::Z, 2),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
    ];
    for (kind, count) in expected {
        assert_eq!(rotation_count(kind), count, "{:?}", kind);
    }
}

#[test]
fn test_every_mask_has_four_cells() {
    for kind in PieceKind::ALL {
        for rotation in 0..rotation_count(kind) {
            assert_eq!(mask(kind, rotation).filled_count(), 4, "{:?} r{}", kind, rotation);
        }
    }
}

#[test]
fn test_rotation_index_wraps() {
    assert_eq!(get_shape(PieceKind::S, 2), get_shape(PieceKind::S, 0));
    assert_eq!(get_shape(PieceKind::O, 3), get_shape(PieceKind::O, 0));
    assert_eq!(get_shape(PieceKind::T, 5), get_shape(PieceKind::T, 1));
}

#[test]
fn test_i_piece_shapes() {
    // Horizontal in the second mask row, vertical in the third column.
    assert_eq!(get_shape(PieceKind::I, 0), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(get_shape(PieceKind::I, 1), [(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_o_rotation_keeps_cells() {
    let piece = Tetromino::spawn(PieceKind::O);
    assert_eq!(piece.rotated().cells(), piece.cells());
}

#[test]
fn test_full_rotation_cycle_returns_home() {
    for kind in PieceKind::ALL {
        let start = Tetromino::spawn(kind);
        let mut piece = start;
        for _ in 0..rotation_count(kind) {
            piece = piece.rotated();
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_spawn_is_valid_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let cells = Tetromino::spawn(kind).cells();
        assert!(board.is_valid_position(&cells), "{:?} spawns off-board", kind);
    }
}
