use crate::session::Piece;
use crate::shapes::PieceMatrix;
use crate::types::{Cell, GameStatus, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub matrix: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.pos.x,
            y: value.pos.y,
        }
    }
}

impl ActiveSnapshot {
    /// Filled cells in board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.matrix
            .filled()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }
}

/// Read-only copy of everything the view needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub started: bool,
    /// Whether the start control currently accepts a (re)start.
    pub start_enabled: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
        self.started = false;
        self.start_enabled = true;
    }

    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
            started: false,
            start_enabled: true,
        }
    }
}
