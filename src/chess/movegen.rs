//! Pseudo-legal move generation.
//!
//! Moves produced here follow each piece's movement pattern but ignore king
//! safety; [`crate::chess::game::Game::legal_moves`] filters them.

use crate::chess::moves::Move;
use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::board::Board;
use crate::core::delta::Delta;
use crate::core::square::Square;

/// Pseudo-legal moves for the piece standing on `from`.
///
/// Panics if `from` is empty; callers must check occupancy first.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let piece = board
        .get(from)
        .unwrap_or_else(|| panic!("no piece at {from} to generate moves for"));
    let mut out = Vec::new();
    piece_moves(board, from, piece, &mut out);
    out
}

/// Appends the pseudo-legal moves of `piece` on `from` to `out`.
pub fn piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => {
            gen_sliding(board, from, piece.side, piece.kind.slide_dirs(), out)
        }
        PieceKind::King | PieceKind::Knight => {
            gen_steps(board, from, piece.side, piece.kind.step_offsets(), out)
        }
        PieceKind::Pawn => gen_pawn(board, from, piece.side, out),
    }
}

fn gen_sliding(board: &Board, from: Square, side: Side, dirs: &[Delta], out: &mut Vec<Move>) {
    for &dir in dirs {
        let mut cur = from.offset(dir);
        while let Some(to) = cur {
            match board.get(to) {
                None => out.push(Move::new(from, to)),
                Some(other) => {
                    if other.side != side {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to.offset(dir);
        }
    }
}

fn gen_steps(board: &Board, from: Square, side: Side, offsets: &[Delta], out: &mut Vec<Move>) {
    for &d in offsets {
        let Some(to) = from.offset(d) else {
            continue;
        };
        if board.get(to).is_some_and(|p| p.side == side) {
            continue;
        }
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(board: &Board, from: Square, side: Side, out: &mut Vec<Move>) {
    let dir = side.pawn_direction();

    if let Some(one) = from.offset(Delta::new(dir, 0)) {
        if board.is_empty_at(one) {
            push_pawn_move(from, one, side, out);

            if from.row() == side.pawn_start_row() {
                if let Some(two) = one.offset(Delta::new(dir, 0)) {
                    if board.is_empty_at(two) {
                        push_pawn_move(from, two, side, out);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(Delta::new(dir, dc)) else {
            continue;
        };
        if board.get(to).is_some_and(|p| p.side != side) {
            push_pawn_move(from, to, side, out);
        }
    }
}

/// A pawn landing on the farthest rank fans out into one move per promotion kind.
fn push_pawn_move(from: Square, to: Square, side: Side, out: &mut Vec<Move>) {
    if to.row() == side.promotion_row() {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::promoting(from, to, kind)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}
