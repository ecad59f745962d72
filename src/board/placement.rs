//! FEN-style piece-placement dump and parse.
//!
//! Covers only the placement field (rows top to bottom, digits for empty
//! runs, uppercase for White). The engine keeps no castling, en passant,
//! or clock state, so there is nothing else to record. Intended for tests
//! and debugging, not persistence.

use super::error::PlacementError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a board from a piece-placement string, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::BadRowCount { rows: rows.len() });
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(PlacementError::TooManyColumns { row, cols: col + 1 });
                    }
                    board.set_piece(Square(row, col), color, piece);
                    col += 1;
                }
            }
            if col > 8 {
                return Err(PlacementError::TooManyColumns { row, cols: col });
            }
        }

        Ok(board)
    }

    /// Render the board as a piece-placement string.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push(char::from_digit(empty, 10).unwrap());
                            empty = 0;
                        }
                        out.push(piece.to_placement_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from_digit(empty, 10).unwrap());
            }
        }
        out
    }
}
