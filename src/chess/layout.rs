use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::square::{Square, BOARD_SIZE};

/// Back-rank order from the a-file to the h-file, shared by both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 placements of the standard starting arrangement.
pub fn standard_placements() -> impl Iterator<Item = (Square, Piece)> {
    [Side::White, Side::Black].into_iter().flat_map(|side| {
        (1..=BOARD_SIZE).flat_map(move |col| {
            let kind = BACK_RANK[(col - 1) as usize];
            [
                (Square::new(side.back_row(), col), Piece::new(side, kind)),
                (
                    Square::new(side.pawn_start_row(), col),
                    Piece::new(side, PieceKind::Pawn),
                ),
            ]
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_sixteen_pieces_per_side() {
        let all: Vec<_> = standard_placements().collect();
        assert_eq!(all.len(), 32);
        for side in [Side::White, Side::Black] {
            assert_eq!(all.iter().filter(|(_, p)| p.side == side).count(), 16);
            assert_eq!(
                all.iter()
                    .filter(|(_, p)| p.side == side && p.kind == PieceKind::King)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn kings_start_on_the_e_file() {
        assert!(standard_placements()
            .any(|(sq, p)| sq == Square::new(1, 5) && p == Piece::new(Side::White, PieceKind::King)));
        assert!(standard_placements()
            .any(|(sq, p)| sq == Square::new(8, 5) && p == Piece::new(Side::Black, PieceKind::King)));
    }
}
