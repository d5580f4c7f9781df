use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::core::square::Square;

/// A move from `start` to `end`.
///
/// `promotion` is set exactly when a pawn reaches the farthest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(start: Square, end: Square, kind: PieceKind) -> Self {
        Self {
            start,
            end,
            promotion: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, " ={kind:?}")?;
        }
        Ok(())
    }
}
