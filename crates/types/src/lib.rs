//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the simulation core, the input mapping and the terminal view.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity tick period |
//! | `DEFAULT_FRAME_MS` | 16 | Frame period of the terminal runner (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::O.tag(), 4);
//! assert_eq!(ShapeKind::ALL[6].tag(), 7);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval: the active piece falls one row per second.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded for every cleared row.
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Default frame period of the terminal runner (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Largest piece matrix dimension (the I piece is 1x4 / 4x1).
pub const MAX_PIECE_DIM: usize = 4;

/// A board or piece cell: `0` is empty, `1..=7` is the tag of the shape
/// occupying it.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY: Cell = 0;

/// The seven shapes, in tag order.
///
/// The tag doubles as the palette index (`tag - 1`):
/// - **I**: cyan, 1x4 bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow, 2x2 square
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All shapes in tag order (`ALL[i].tag() == i + 1`).
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Non-zero cell value used by every filled cell of this shape.
    pub const fn tag(self) -> Cell {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }
}

/// Board coordinate of a piece's top-left matrix corner.
///
/// Signed so that candidate positions left of or above the board can be
/// expressed and rejected by the collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Whether the current run is still being played.
///
/// `Over` is entered only when a freshly spawned piece collides with the
/// board, and left only through an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Over,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self == GameStatus::Over
    }
}

/// Actions produced by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Immediate gravity tick
    SoftDrop,
    /// Rotate the piece a quarter turn
    Rotate,
    /// Start control: (re)initialize the game and start the loop
    Start,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_shape_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, i + 1);
            assert_ne!(kind.tag(), EMPTY);
        }
    }

    #[test]
    fn position_offset() {
        let p = Position::new(3, 0);
        assert_eq!(p.offset(-1, 0), Position::new(2, 0));
        assert_eq!(p.offset(0, 1), Position::new(3, 1));
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(LINE_CLEAR_POINTS, 10);
    }
}
