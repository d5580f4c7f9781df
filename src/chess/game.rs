use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::chess::attacks::{is_attacked, king_attacked};
use crate::chess::error::GameError;
use crate::chess::movegen::pseudo_legal_moves;
use crate::chess::moves::Move;
use crate::chess::piece::{Piece, Side};
use crate::core::board::Board;
use crate::core::square::Square;

/// Terminal-state summary for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// A game: one board plus the side to move.
///
/// The only transition is a successful [`Game::apply_move`], which flips the
/// side to move. Checkmate and stalemate are queries on top of that state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Side,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting arrangement, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::White)
    }

    pub fn from_board(board: Board, turn: Side) -> Self {
        Self { board, turn }
    }

    pub fn with_turn(mut self, turn: Side) -> Self {
        self.turn = turn;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board wholesale. The side to move is left as it was.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Restores the side to move (e.g. when rehydrating a stored game).
    pub fn set_turn(&mut self, turn: Side) {
        self.turn = turn;
    }

    /// Legal moves for the piece on `from`; empty if the square is empty.
    ///
    /// Each candidate is tried on a scratch copy of the board, so the game's
    /// own board is never touched.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        let Some(piece) = self.board.get(from) else {
            return Vec::new();
        };
        pseudo_legal_moves(&self.board, from)
            .into_iter()
            .filter(|mv| {
                let mut probe = self.board.clone();
                play_unchecked(&mut probe, *mv, piece);
                // No king on the board means there is nothing to leave in check.
                let exposed = king_attacked(&probe, piece.side).unwrap_or(false);
                trace!("probe {mv}: king exposed = {exposed}");
                !exposed
            })
            .collect()
    }

    /// Every legal move available to `side`, grouped by square in row-major order.
    pub fn all_legal_moves(&self, side: Side) -> Vec<Move> {
        self.board
            .pieces_of(side)
            .flat_map(|(sq, _)| self.legal_moves(sq))
            .collect()
    }

    pub fn has_any_legal_move(&self, side: Side) -> bool {
        self.board
            .pieces_of(side)
            .any(|(sq, _)| !self.legal_moves(sq).is_empty())
    }

    /// Whether `side`'s king is attacked.
    ///
    /// Fails with [`GameError::InvariantViolation`] if `side` has no king.
    pub fn try_in_check(&self, side: Side) -> Result<bool, GameError> {
        let king = self
            .board
            .king_square(side)
            .ok_or_else(|| GameError::InvariantViolation {
                reason: format!("{side} has no king"),
            })?;
        Ok(is_attacked(&self.board, king, side.opponent()))
    }

    /// Panics if `side` has no king; that never happens in a game played by the rules.
    pub fn in_check(&self, side: Side) -> bool {
        self.try_in_check(side).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn in_checkmate(&self, side: Side) -> bool {
        self.in_check(side) && !self.has_any_legal_move(side)
    }

    pub fn in_stalemate(&self, side: Side) -> bool {
        !self.in_check(side) && !self.has_any_legal_move(side)
    }

    pub fn status(&self) -> GameStatus {
        let check = self.in_check(self.turn);
        match (check, self.has_any_legal_move(self.turn)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Validates and plays `mv`, then hands the turn to the other side.
    ///
    /// On error the game is left exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        let piece = self
            .validate(mv)
            .inspect_err(|e| debug!("rejected {mv}: {e}"))?;

        play_unchecked(&mut self.board, mv, piece);
        self.turn = self.turn.opponent();
        debug!("{} played {mv}; {} to move", piece.side, self.turn);
        Ok(())
    }

    fn validate(&self, mv: Move) -> Result<Piece, GameError> {
        let piece = self
            .board
            .get(mv.start)
            .ok_or(GameError::NoPieceAtSource { square: mv.start })?;
        if piece.side != self.turn {
            return Err(GameError::WrongTurn {
                expected: self.turn,
                found: piece.side,
            });
        }
        if !self.legal_moves(mv.start).contains(&mv) {
            return Err(GameError::IllegalMove { mv });
        }
        Ok(piece)
    }
}

/// Moves `piece` along `mv` on `board`, promoting if asked. No checks.
fn play_unchecked(board: &mut Board, mv: Move, piece: Piece) {
    let landed = match mv.promotion {
        Some(kind) => Piece::new(piece.side, kind),
        None => piece,
    };
    board.place(mv.end, Some(landed));
    board.place(mv.start, None);
}
