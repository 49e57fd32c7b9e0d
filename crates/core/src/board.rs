//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the top edge (y < 0) are not stored; pieces may reach into them.

use arrayvec::ArrayVec;

use crate::pieces::MinoOffset;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one clear, top to bottom
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a piece may occupy `cells`.
    ///
    /// Every cell needs `0 <= x < width` and `y < height`. Cells with `y >= 0`
    /// must also be empty; cells above the top edge skip the occupancy check.
    pub fn is_valid_position(&self, cells: &[MinoOffset]) -> bool {
        cells.iter().all(|&(x, y)| {
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return false;
            }
            y < 0 || !self.is_occupied(x, y)
        })
    }

    /// Write a locked piece into the grid.
    ///
    /// Cells above the top edge are dropped without being recorded. Returns
    /// how many cells were written.
    pub fn place(&mut self, cells: &[MinoOffset], kind: PieceKind) -> usize {
        let mut written = 0;
        for &(x, y) in cells {
            if y >= 0 && self.set(x, y, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows in a single pass.
    ///
    /// Full rows are found against the grid as it was before the call, then
    /// removed together: surviving rows keep their order and settle at the
    /// bottom, and empty rows refill the top. Returns the cleared row indices
    /// (pre-clear numbering, top to bottom).
    pub fn clear_full_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top, compacting surviving rows downwards
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);

        cleared.reverse();
        cleared
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a 2D array (snapshot export)
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_valid_position_above_top_edge() {
        let mut board = Board::new();
        fill_row(&mut board, 0, PieceKind::I);

        // Hidden rows are never occupied, whatever lies below them.
        assert!(board.is_valid_position(&[(0, -1), (9, -4)]));
        // But they still respect the side walls.
        assert!(!board.is_valid_position(&[(-1, -1)]));
        assert!(!board.is_valid_position(&[(10, -2)]));
        // Visible occupied cells reject.
        assert!(!board.is_valid_position(&[(0, -1), (0, 0)]));
    }

    #[test]
    fn test_place_skips_hidden_rows() {
        let mut board = Board::new();
        let written = board.place(&[(4, -1), (4, 0), (5, 0), (5, -2)], PieceKind::Z);
        assert_eq!(written, 2);
        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.get(4, 0), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(5, 0), Some(Some(PieceKind::Z)));
    }

    #[test]
    fn test_clear_full_lines_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 18, PieceKind::I);
        fill_row(&mut board, 19, PieceKind::I);
        board.set(2, 17, Some(PieceKind::T));

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.as_slice(), &[18, 19]);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_full_lines_whole_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            fill_row(&mut board, y, PieceKind::L);
        }
        let cleared = board.clear_full_lines();
        assert_eq!(cleared.len(), HEIGHT);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_write_grid_matches_get() {
        let mut board = Board::new();
        board.set(3, 7, Some(PieceKind::S));
        let mut grid = [[None; WIDTH]; HEIGHT];
        board.write_grid(&mut grid);
        assert_eq!(grid[7][3], Some(PieceKind::S));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
