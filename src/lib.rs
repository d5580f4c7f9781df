//! Rules engine for standard chess: move generation, legality, check,
//! checkmate and stalemate, plus a small in-memory store of game records.

pub mod chess;
pub mod core;
pub mod store;

pub use crate::chess::error::GameError;
pub use crate::chess::game::{Game, GameStatus};
pub use crate::chess::moves::Move;
pub use crate::chess::piece::{Piece, PieceKind, Side};
pub use crate::core::board::Board;
pub use crate::core::square::Square;
