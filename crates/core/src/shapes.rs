//! Shapes module - the seven shape templates and the piece matrix type
//!
//! Templates are immutable prototypes. [`template`] hands out a copy, so
//! rotating the active piece never touches the shared table.

use crate::types::{Cell, ShapeKind, EMPTY, MAX_PIECE_DIM};

const MATRIX_CELLS: usize = MAX_PIECE_DIM * MAX_PIECE_DIM;

/// A small rectangular matrix of cell values (at most 4x4).
///
/// Storage is a flat row-major array with a fixed stride of
/// [`MAX_PIECE_DIM`]; only the top-left `rows x cols` window is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    rows: u8,
    cols: u8,
    cells: [Cell; MATRIX_CELLS],
}

impl PieceMatrix {
    /// Build a matrix from the top-left `rows x cols` window of `grid`.
    pub const fn from_grid(rows: u8, cols: u8, grid: [[Cell; MAX_PIECE_DIM]; MAX_PIECE_DIM]) -> Self {
        let mut cells = [EMPTY; MATRIX_CELLS];
        let mut y = 0;
        while y < rows as usize {
            let mut x = 0;
            while x < cols as usize {
                cells[y * MAX_PIECE_DIM + x] = grid[y][x];
                x += 1;
            }
            y += 1;
        }
        Self { rows, cols, cells }
    }

    /// Build a matrix from row slices.
    ///
    /// Returns `None` for an empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_PIECE_DIM || width == 0 || width > MAX_PIECE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [EMPTY; MATRIX_CELLS];
        for (y, row) in rows.iter().enumerate() {
            cells[y * MAX_PIECE_DIM..y * MAX_PIECE_DIM + width].copy_from_slice(row);
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell at `(x, y)`; anything outside the matrix reads as empty.
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.cols || y >= self.rows {
            return EMPTY;
        }
        self.cells[y as usize * MAX_PIECE_DIM + x as usize]
    }

    /// One row of the matrix.
    pub fn row(&self, y: u8) -> &[Cell] {
        let start = y as usize * MAX_PIECE_DIM;
        if y >= self.rows {
            return &[];
        }
        &self.cells[start..start + self.cols as usize]
    }

    /// Iterate the non-zero cells as `(x, y, value)` relative to the top-left corner.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols).filter_map(move |x| {
                let v = self.get(x, y);
                (v != EMPTY).then_some((x as i8, y as i8, v))
            })
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotate a quarter turn: transpose, then reverse the row order, so
    /// `out[i][j] = in[j][cols - 1 - i]`.
    ///
    /// On screen (y grows downward) this turns the shape counter-clockwise.
    /// The result has its dimensions swapped.
    pub fn rotated(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            cells: [EMPTY; MATRIX_CELLS],
        };
        for i in 0..out.rows {
            for j in 0..out.cols {
                out.cells[i as usize * MAX_PIECE_DIM + j as usize] = self.get(self.cols - 1 - i, j);
            }
        }
        out
    }

    /// Convert to nested rows (tests and debugging).
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows).map(|y| self.row(y).to_vec()).collect()
    }
}

/// The seven shape templates, indexed by `tag - 1`.
pub const SHAPE_TEMPLATES: [PieceMatrix; 7] = [
    // I
    PieceMatrix::from_grid(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
    // J
    PieceMatrix::from_grid(2, 3, [[2, 0, 0, 0], [2, 2, 2, 0], [0; 4], [0; 4]]),
    // L
    PieceMatrix::from_grid(2, 3, [[0, 0, 3, 0], [3, 3, 3, 0], [0; 4], [0; 4]]),
    // O
    PieceMatrix::from_grid(2, 2, [[4, 4, 0, 0], [4, 4, 0, 0], [0; 4], [0; 4]]),
    // S
    PieceMatrix::from_grid(2, 3, [[0, 5, 5, 0], [5, 5, 0, 0], [0; 4], [0; 4]]),
    // T
    PieceMatrix::from_grid(2, 3, [[0, 6, 0, 0], [6, 6, 6, 0], [0; 4], [0; 4]]),
    // Z
    PieceMatrix::from_grid(2, 3, [[7, 7, 0, 0], [0, 7, 7, 0], [0; 4], [0; 4]]),
];

/// A fresh copy of the template for `kind`.
pub fn template(kind: ShapeKind) -> PieceMatrix {
    SHAPE_TEMPLATES[(kind.tag() - 1) as usize]
}
