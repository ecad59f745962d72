//! Per-piece move legality rules.
//!
//! The validator is a pure predicate over (board, source, destination): it
//! never mutates the board and keeps no state between calls. Ownership of
//! the source piece by the side to move is the caller's concern (see
//! [`GameState::select_or_move`](crate::game::GameState::select_or_move));
//! only piece geometry and board occupancy are checked here.
//!
//! Deliberately unchecked, matching the engine's scope: check safety,
//! castling, en passant, and promotion.

use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if moving the piece at `from` to `to` is legal under
    /// piece-movement and obstruction rules.
    ///
    /// An empty `from` square is never a legal move. A destination held by
    /// a piece of the mover's own color is never legal (this also rejects
    /// `from == to`, since the source square holds the mover's piece).
    #[must_use]
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if let Some((dest_color, _)) = self.piece_at(to) {
            if dest_color == color {
                return false;
            }
        }

        let dr = to.row() as isize - from.row() as isize;
        let dc = to.col() as isize - from.col() as isize;

        match piece {
            Piece::Pawn => self.pawn_rule(color, from, to, dr, dc),
            Piece::Rook => self.rook_rule(from, to),
            Piece::Bishop => self.bishop_rule(from, to, dr, dc),
            // The queen moves like a rook or a bishop; reuse their rules.
            Piece::Queen => self.rook_rule(from, to) || self.bishop_rule(from, to, dr, dc),
            Piece::King => dr.abs() <= 1 && dc.abs() <= 1,
            Piece::Knight => (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2),
        }
    }

    fn pawn_rule(&self, color: Color, from: Square, to: Square, dr: isize, dc: isize) -> bool {
        let dir = color.pawn_direction();
        let dest_occupied = self.piece_at(to).is_some();

        // Single step forward onto an empty square.
        if dc == 0 && dr == dir && !dest_occupied {
            return true;
        }
        // Double step from the home row; both squares ahead must be empty.
        if dc == 0 && dr == 2 * dir && from.row() == color.pawn_start_row() && !dest_occupied {
            let step = Square((from.row() as isize + dir) as usize, from.col());
            if self.piece_at(step).is_none() {
                return true;
            }
        }
        // Diagonal capture. Same-color occupants were already rejected.
        dc.abs() == 1 && dr == dir && dest_occupied
    }

    fn rook_rule(&self, from: Square, to: Square) -> bool {
        if from.row() == to.row() {
            let (lo, hi) = (from.col().min(to.col()), from.col().max(to.col()));
            return (lo + 1..hi).all(|col| self.piece_at(Square(from.row(), col)).is_none());
        }
        if from.col() == to.col() {
            let (lo, hi) = (from.row().min(to.row()), from.row().max(to.row()));
            return (lo + 1..hi).all(|row| self.piece_at(Square(row, from.col())).is_none());
        }
        false
    }

    fn bishop_rule(&self, from: Square, to: Square, dr: isize, dc: isize) -> bool {
        if dr.abs() != dc.abs() || dr == 0 {
            return false;
        }
        let row_step = if dr > 0 { 1 } else { -1 };
        let col_step = if dc > 0 { 1 } else { -1 };
        let mut row = from.row() as isize + row_step;
        let mut col = from.col() as isize + col_step;
        while row != to.row() as isize {
            if self.piece_at(Square(row as usize, col as usize)).is_some() {
                return false;
            }
            row += row_step;
            col += col_step;
        }
        true
    }
}
