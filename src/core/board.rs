use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::layout::standard_placements;
use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::square::{Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// An 8x8 grid of optional pieces.
///
/// The board knows nothing about the rules: it will hold any arrangement,
/// including ones without kings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A board set up in the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset_to_standard_start();
        board
    }

    /// Unconditionally writes `piece` (or clears the square with `None`).
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) {
        let (r, c) = sq.index();
        self.cells[r][c] = piece;
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        let (r, c) = sq.index();
        self.cells[r][c]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn clear(&mut self) {
        self.cells = [[None; N]; N];
    }

    pub fn reset_to_standard_start(&mut self) {
        self.clear();
        for (sq, piece) in standard_placements() {
            self.place(sq, Some(piece));
        }
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    /// First square holding `side`'s king, scanning row-major.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "{row} ")?;
            for col in 1..=BOARD_SIZE {
                let c = self
                    .get(Square::new(row, col))
                    .map_or('.', |p| p.symbol());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_get() {
        let mut board = Board::empty();
        let sq = Square::new(4, 4);
        assert_eq!(board.get(sq), None);
        let rook = Piece::new(Side::Black, PieceKind::Rook);
        board.place(sq, Some(rook));
        assert_eq!(board.get(sq), Some(rook));
        board.place(sq, None);
        assert!(board.is_empty_at(sq));
    }

    #[test]
    fn reset_clears_previous_contents() {
        let mut board = Board::empty();
        board.place(Square::new(4, 4), Some(Piece::new(Side::White, PieceKind::Queen)));
        board.reset_to_standard_start();
        assert_eq!(board.get(Square::new(4, 4)), None);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn equality_is_square_by_square() {
        let mut a = Board::standard();
        let b = Board::standard();
        assert_eq!(a, b);
        a.place(Square::new(2, 1), None);
        assert_ne!(a, b);
    }

    #[test]
    fn diagram_puts_black_on_top() {
        let text = Board::standard().to_string();
        let first = text.lines().next().unwrap_or_default();
        assert_eq!(first, "8 rnbqkbnr");
        assert!(text.contains("1 RNBQKBNR"));
    }
}
