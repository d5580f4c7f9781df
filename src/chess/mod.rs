//! Standard chess rules on an 8x8 board.

pub mod attacks;
pub mod error;
pub mod game;
pub mod layout;
pub mod movegen;
pub mod moves;
pub mod piece;
