use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::delta::Delta;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board, addressed by 1-based row (rank) and column (file).
///
/// Row 1 is White's back rank, column 1 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate is outside `1..=8`.
    pub fn new(row: u8, col: u8) -> Self {
        Self::try_new(row, col).unwrap_or_else(|| panic!("{}", OffBoard { row, col }))
    }

    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        if (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `delta` away from this one, or `None` if that leaves the board.
    pub fn offset(self, delta: Delta) -> Option<Square> {
        let row = self.row as i8 + delta.row;
        let col = self.col as i8 + delta.col;
        if row < 1 || col < 1 {
            return None;
        }
        Square::try_new(row as u8, col as u8)
    }

    /// All 64 squares in row-major order, starting at (1,1).
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Square { row, col }))
    }

    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        ((self.row - 1) as usize, (self.col - 1) as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square ({row},{col}) is off the board")]
pub struct OffBoard {
    pub row: u8,
    pub col: u8,
}

impl TryFrom<(u8, u8)> for Square {
    type Error = OffBoard;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::try_new(row, col).ok_or(OffBoard { row, col })
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
