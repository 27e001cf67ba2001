//! Errors used throughout the draughts engine.
//!
//! Only recoverable failures live here: malformed position text, moves that
//! are not legal in the current position, or history misuse. Contract
//! violations inside the core (moving a piece that does not belong to the
//! side to move, tiles outside the board) panic instead.

use thiserror::Error;

use crate::moves::draughts_move::DraughtsMove;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    /// The position text could not be interpreted.
    #[error("invalid board layout: {reason}")]
    InvalidLayout { reason: String },

    /// The move is not among the legal moves of the current position.
    #[error("illegal move {mv}")]
    IllegalMove { mv: DraughtsMove },

    /// Tile index outside `[0, 64)` supplied by a caller.
    #[error("tile {tile} is outside the board (must be 0-63)")]
    TileOutOfBounds { tile: usize },

    /// Undo requested with an empty move history.
    #[error("there is no move to undo")]
    NothingToUndo,

    /// The side to move has no legal move.
    #[error("no legal moves for the side to move")]
    NoLegalMoves,
}

pub type DraughtsResult<T> = Result<T, DraughtsError>;

impl DraughtsError {
    pub(crate) fn layout(reason: impl Into<String>) -> Self {
        DraughtsError::InvalidLayout {
            reason: reason.into(),
        }
    }
}
