use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

/// Back-rank piece order by column, applied to both colors.
pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 chess board mapping squares to optional pieces.
///
/// Rows run top to bottom: row 0 holds Black's back rank, row 7 White's.
/// The board holds no side-to-move or rights state; that lives in
/// [`GameState`](crate::game::GameState).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Create a board with the standard starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            board.squares[1][col] = Some((Color::Black, Piece::Pawn));
            board.squares[6][col] = Some((Color::White, Piece::Pawn));
        }
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some((Color::Black, piece));
            board.squares[7][col] = Some((Color::White, piece));
        }
        board
    }

    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece occupying a square, if any.
    ///
    /// # Panics
    /// Panics if the square is out of range; callers are expected to pass
    /// coordinates in [0,7].
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    /// Place a piece on a square, replacing whatever was there.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.row()][sq.col()] = Some((color, piece));
    }

    /// Move whatever occupies `from` to `to`, overwriting any piece at
    /// `to`, then clear `from`.
    ///
    /// Performs no legality checking; validate with
    /// [`is_valid_move`](Board::is_valid_move) first.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        self.squares[to.row()][to.col()] = self.squares[from.row()][from.col()];
        self.squares[from.row()][from.col()] = None;
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = match self.squares[row][col] {
                    Some((color, piece)) => piece.to_placement_char(color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f, "\n  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
