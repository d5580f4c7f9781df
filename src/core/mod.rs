//! Board primitives with no rules knowledge:
//!
//! - [`delta`]: row/column steps and the king step set.
//! - [`square`]: a checked (row, column) pair on the 8x8 board.
//! - [`board`]: the 8x8 grid of optional pieces.

pub mod board;
pub mod delta;
pub mod square;
