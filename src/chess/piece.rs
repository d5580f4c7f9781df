use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::delta::{Delta, KING_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row step of this side's pawns.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => 2,
            Side::Black => 7,
        }
    }

    /// The farthest rank, where this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 8,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 8,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the order moves are generated.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Delta] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    /// Offsets for pieces that move exactly one step.
    #[inline]
    pub fn step_offsets(self) -> &'static [Delta] {
        match self {
            PieceKind::King => &KING_STEPS,
            PieceKind::Knight => &KNIGHT_DELTAS,
            _ => &[],
        }
    }

    fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// A piece is just its owner and kind; where it stands is the board's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    /// Single-character diagram symbol: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

pub const ROOK_DIRS: [Delta; 4] = [
    Delta { row: 1, col: 0 },
    Delta { row: -1, col: 0 },
    Delta { row: 0, col: 1 },
    Delta { row: 0, col: -1 },
];

pub const BISHOP_DIRS: [Delta; 4] = [
    Delta { row: 1, col: 1 },
    Delta { row: 1, col: -1 },
    Delta { row: -1, col: 1 },
    Delta { row: -1, col: -1 },
];

pub const QUEEN_DIRS: [Delta; 8] = [
    Delta { row: 1, col: 0 },
    Delta { row: -1, col: 0 },
    Delta { row: 0, col: 1 },
    Delta { row: 0, col: -1 },
    Delta { row: 1, col: 1 },
    Delta { row: 1, col: -1 },
    Delta { row: -1, col: 1 },
    Delta { row: -1, col: -1 },
];

pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta { row: -2, col: -1 },
    Delta { row: -2, col: 1 },
    Delta { row: -1, col: -2 },
    Delta { row: -1, col: 2 },
    Delta { row: 1, col: -2 },
    Delta { row: 1, col: 2 },
    Delta { row: 2, col: -1 },
    Delta { row: 2, col: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
    }

    #[test]
    fn pieces_compare_by_value() {
        let a = Piece::new(Side::White, PieceKind::Queen);
        let b = Piece::new(Side::White, PieceKind::Queen);
        assert_eq!(a, b);
        assert_ne!(a, Piece::new(Side::Black, PieceKind::Queen));
    }

    #[test]
    fn symbols_follow_side_case() {
        assert_eq!(Piece::new(Side::White, PieceKind::Knight).symbol(), 'N');
        assert_eq!(Piece::new(Side::Black, PieceKind::King).symbol(), 'k');
    }
}
