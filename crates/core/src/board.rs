//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cell values (`0` empty, `1..=7` shape tag).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! The only gameplay mutators are [`Board::merge`] and [`Board::sweep`].

use arrayvec::ArrayVec;

use crate::scoring::line_clear_points;
use crate::shapes::PieceMatrix;
use crate::types::{Cell, Position, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Result of one [`Board::sweep`] pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Row indices removed, in the order they were found (bottom first).
    pub rows: ArrayVec<usize, HEIGHT>,
    /// Points earned by this sweep.
    pub points: u32,
}

impl SweepReport {
    pub fn lines(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows (top row first).
    pub fn from_rows(rows: [[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
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

    /// In bounds and empty.
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(EMPTY))
    }

    /// Row `y` as a slice. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Commit a piece's non-zero cells at `offset`, overwriting what is there.
    ///
    /// Cells falling outside the board are skipped; a piece that passed the
    /// collision check never has any.
    pub fn merge(&mut self, piece: &PieceMatrix, offset: Position) {
        for (dx, dy, value) in piece.filled() {
            let (Some(x), Some(y)) = (offset.x.checked_add(dx), offset.y.checked_add(dy)) else {
                continue;
            };
            self.set(x, y, value);
        }
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Rows above `y` move down by one; rows below are untouched.
    pub fn remove_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(EMPTY);
    }

    /// Clear complete rows, scanning from the bottom row up.
    ///
    /// After removing row `y` the scan continues at `y - 1`, which now holds
    /// the row that used to sit at `y - 2`. The row shifted into `y` is not
    /// re-examined, so of two adjacent full rows only the lower one is
    /// cleared in a single pass.
    pub fn sweep(&mut self) -> SweepReport {
        let mut report = SweepReport::default();
        for y in (0..HEIGHT).rev() {
            if !self.is_row_full(y) {
                continue;
            }
            self.remove_row(y);
            report.rows.push(y);
        }
        report.points = line_clear_points(report.rows.len());
        report
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D grid (snapshot/rendering).
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Convert to nested rows for tests/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|r| r.to_vec()).collect()
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
    use crate::shapes::template;
    use crate::types::ShapeKind;

    fn fill_row(board: &mut Board, y: i8, tag: Cell) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, tag);
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
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.rows().count(), HEIGHT);
        assert!(board.rows().all(|r| r.len() == WIDTH));
    }

    #[test]
    fn test_merge_writes_only_piece_cells() {
        let mut board = Board::new();
        board.set(0, 19, 2);
        let before = board.clone();

        let t = template(ShapeKind::T);
        board.merge(&t, Position::new(4, 10));

        assert_eq!(board.get(5, 10), Some(6));
        assert_eq!(board.get(4, 11), Some(6));
        assert_eq!(board.get(5, 11), Some(6));
        assert_eq!(board.get(6, 11), Some(6));
        // Matrix holes do not overwrite.
        assert_eq!(board.get(4, 10), Some(EMPTY));
        assert_eq!(board.get(6, 10), Some(EMPTY));

        let changed = board
            .cells()
            .iter()
            .zip(before.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 4);
    }

    #[test]
    fn test_remove_row_shifts_above_down() {
        let mut board = Board::new();
        board.set(3, 17, 1);
        board.set(4, 18, 2);
        board.set(5, 19, 3);

        board.remove_row(18);

        assert_eq!(board.get(3, 18), Some(1));
        assert_eq!(board.get(5, 19), Some(3));
        assert_eq!(board.get(4, 18), Some(EMPTY));
        assert!(board.row(0).iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_sweep_skips_row_shifted_into_checked_index() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 1);
        fill_row(&mut board, 18, 2);

        let report = board.sweep();

        assert_eq!(report.rows.as_slice(), &[19]);
        assert_eq!(report.points, 10);
        // The second full row moved down and survives this pass.
        assert!(board.is_row_full(19));
        assert_eq!(board.get(0, 19), Some(2));

        let again = board.sweep();
        assert_eq!(again.rows.as_slice(), &[19]);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_sweep_clears_separated_rows_in_one_pass() {
        let mut board = Board::new();
        fill_row(&mut board, 19, 1);
        board.set(0, 18, 5);
        fill_row(&mut board, 17, 3);

        let report = board.sweep();

        assert_eq!(report.rows.as_slice(), &[19, 18]);
        assert_eq!(report.lines(), 2);
        assert_eq!(report.points, 20);
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.get(0, 19), Some(5));
    }
}
