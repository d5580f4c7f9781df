use crate::chess::movegen::piece_moves;
use crate::chess::piece::Side;
use crate::core::board::Board;
use crate::core::square::Square;

/// True iff some piece of side `by` has `target` among its pseudo-legal destinations.
pub fn is_attacked(board: &Board, target: Square, by: Side) -> bool {
    let mut scratch = Vec::new();
    for (from, piece) in board.pieces_of(by) {
        scratch.clear();
        piece_moves(board, from, piece, &mut scratch);
        if scratch.iter().any(|m| m.end == target) {
            return true;
        }
    }
    false
}

/// Whether `side`'s king is attacked, or `None` if `side` has no king on the board.
pub fn king_attacked(board: &Board, side: Side) -> Option<bool> {
    board
        .king_square(side)
        .map(|king| is_attacked(board, king, side.opponent()))
}
