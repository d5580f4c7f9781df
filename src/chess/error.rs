use thiserror::Error;

use crate::chess::moves::Move;
use crate::chess::piece::Side;
use crate::core::square::Square;

/// Errors raised by [`crate::chess::game::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move's start square is empty.
    #[error("no piece at {square}")]
    NoPieceAtSource { square: Square },

    /// The piece being moved does not belong to the side to move.
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Side, found: Side },

    /// The move is not among the piece's legal moves.
    #[error("illegal move {mv}")]
    IllegalMove { mv: Move },

    /// The board violates a rules invariant (e.g. a side has no king).
    #[error("board invariant violated: {reason}")]
    InvariantViolation { reason: String },
}
