//! Collision module - the single legality check used by every move
//!
//! Downward and horizontal movement, rotation and spawn validity all go
//! through [`collides`].

use crate::board::Board;
use crate::shapes::PieceMatrix;
use crate::types::Position;

/// True if any non-zero cell of `piece`, placed with its top-left corner at
/// `offset`, lands outside the board or on a filled board cell.
pub fn collides(piece: &PieceMatrix, board: &Board, offset: Position) -> bool {
    piece.filled().any(|(dx, dy, _)| {
        match (offset.x.checked_add(dx), offset.y.checked_add(dy)) {
            (Some(x), Some(y)) => !board.is_vacant(x, y),
            _ => true,
        }
    })
}
