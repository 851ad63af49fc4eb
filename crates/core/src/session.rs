//! Session module - the piece controller and the state of one run
//!
//! A [`GameSession`] owns the board, the active piece, the score and the
//! game status. Every player or gravity mutation follows the same pattern:
//! build a candidate piece, check it with [`collides`], and commit it only
//! when it is legal.

use crate::board::{Board, SweepReport};
use crate::collision::collides;
use crate::rng::{random_shape, RandomSource, SimpleRng};
use crate::scoring::add_points;
use crate::shapes::{template, PieceMatrix};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameStatus, Position, ShapeKind, BOARD_WIDTH};

/// The falling, player-controlled piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: PieceMatrix,
    pub pos: Position,
}

impl Piece {
    /// A fresh copy of `kind`'s template, horizontally centered on the top row.
    pub fn spawn(kind: ShapeKind) -> Self {
        let matrix = template(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (matrix.cols() / 2) as i8;
        Self {
            kind,
            matrix,
            pos: Position::new(x, 0),
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.matrix, board, self.pos)
    }

    /// Candidate moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            pos: self.pos.offset(dx, dy),
            ..*self
        }
    }

    /// Candidate rotated a quarter turn in place.
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotated(),
            ..*self
        }
    }

}

/// What a gravity tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece merged, `lines` rows were swept and a new piece spawned.
    Locked { lines: u32 },
    /// The piece merged and the replacement could not spawn.
    GameOver { lines: u32 },
    /// No active piece (not started, or already over).
    Ignored,
}

/// Complete state of one run.
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    rng: R,
    score: u32,
    lines: u32,
    status: GameStatus,
    started: bool,
    /// Number of pieces activated since the last restart.
    pieces: u32,
    last_sweep: Option<SweepReport>,
}

impl<R: RandomSource> GameSession<R> {
    /// Create an idle session. Nothing spawns until [`GameSession::restart`].
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng,
            score: 0,
            lines: 0,
            status: GameStatus::Running,
            started: false,
            pieces: 0,
            last_sweep: None,
        }
    }

    /// Start a session on a prepared board and spawn the first piece.
    ///
    /// The spawn is checked against `board` like any other, so a board with
    /// a blocked spawn area yields a session that is already over.
    pub fn with_board(rng: R, board: Board) -> Self {
        let mut session = Self::new(rng);
        session.started = true;
        session.board = board;
        session.spawn();
        session
    }

    /// Reinitialize board, score and status, then spawn the first piece.
    ///
    /// The random source keeps its position; it is not reseeded.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.status = GameStatus::Running;
        self.started = true;
        self.pieces = 0;
        self.last_sweep = None;
        log::info!("game started");
        self.spawn();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Rows removed by the most recent lock, if any piece has locked.
    pub fn last_sweep(&self) -> Option<&SweepReport> {
        self.last_sweep.as_ref()
    }

    /// Activate a random piece at the spawn position.
    ///
    /// Returns false and ends the game if the piece would overlap the board.
    pub fn spawn(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        let piece = Piece::spawn(random_shape(&mut self.rng));
        if piece.collides(&self.board) {
            self.active = None;
            self.status = GameStatus::Over;
            log::info!(
                "game over: {:?} blocked at spawn, score {} lines {}",
                piece.kind,
                self.score,
                self.lines
            );
            return false;
        }

        log::debug!("spawned {:?} at ({}, {})", piece.kind, piece.pos.x, piece.pos.y);
        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);
        true
    }

    /// Commit `candidate` if it is legal. Returns whether it was committed.
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if candidate.collides(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Move the active piece horizontally by `dx` cells.
    pub fn try_shift(&mut self, dx: i8) -> bool {
        match self.active {
            Some(active) if !self.is_over() => self.try_commit(active.shifted(dx, 0)),
            _ => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate a quarter turn in place. A colliding rotation leaves the piece in
    /// its previous orientation; there is no kick search.
    pub fn rotate(&mut self) -> bool {
        match self.active {
            Some(active) if !self.is_over() => self.try_commit(active.rotated()),
            _ => false,
        }
    }

    /// Gravity tick (also used for a manual drop).
    ///
    /// Moves the piece down one row, or, if it cannot move, merges it,
    /// sweeps complete rows and spawns the next piece.
    pub fn drop(&mut self) -> DropOutcome {
        let Some(active) = self.active else {
            return DropOutcome::Ignored;
        };
        if self.is_over() {
            return DropOutcome::Ignored;
        }

        if self.try_commit(active.shifted(0, 1)) {
            return DropOutcome::Moved;
        }

        let lines = self.lock(active);
        if self.spawn() {
            DropOutcome::Locked { lines }
        } else {
            DropOutcome::GameOver { lines }
        }
    }

    /// Merge `piece` into the board and sweep. Returns rows cleared.
    fn lock(&mut self, piece: Piece) -> u32 {
        self.board.merge(&piece.matrix, piece.pos);
        self.active = None;

        let report = self.board.sweep();
        let lines = report.lines();
        if lines > 0 {
            self.score = add_points(self.score, report.points);
            self.lines = self.lines.saturating_add(lines);
            log::debug!(
                "cleared rows {:?}, score now {}",
                report.rows.as_slice(),
                self.score
            );
        } else {
            log::debug!("locked {:?} at ({}, {})", piece.kind, piece.pos.x, piece.pos.y);
        }
        self.last_sweep = Some(report);
        lines
    }

    /// Apply a gameplay action. Ignored once the game is over.
    ///
    /// `Start` is owned by the game loop driver and is not handled here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_over() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.drop() != DropOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
            GameAction::Start => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
        out.started = self.started;
        out.start_enabled = !self.started || self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}
