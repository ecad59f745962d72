//! Game session state and the two-click selection state machine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece, Square};

macro_rules! game_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    }};
}

/// The full state of one game session: board, side to move, and the
/// transient selection made by the side to move's first click.
///
/// There is no terminal state; the session runs until the caller stops
/// feeding it interactions.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    selection: Option<Square>,
}

impl GameState {
    /// Create a game at the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Create a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            selection: None,
        }
    }

    /// The current board position.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The currently selected origin square, if any.
    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// The piece occupying a square, for rendering.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Process one square interaction.
    ///
    /// With no selection, a click on a piece belonging to the side to move
    /// selects it; anything else is a no-op. With a selection, the click is
    /// an attempted move from the selected square: if legal, the board is
    /// updated and the turn flips. The selection clears either way, and an
    /// illegal attempt is not an error, just an unchanged board.
    pub fn select_or_move(&mut self, sq: Square) {
        match self.selection {
            None => {
                if let Some((color, _)) = self.board.piece_at(sq) {
                    if color == self.side_to_move {
                        self.selection = Some(sq);
                        game_event!("{color} selected {sq}");
                    }
                }
            }
            Some(origin) => {
                if self.board.is_valid_move(origin, sq) {
                    self.board.apply_move(origin, sq);
                    self.side_to_move = self.side_to_move.opponent();
                    game_event!("moved {origin} to {sq}, {} to move", self.side_to_move);
                } else {
                    game_event!("rejected move {origin} to {sq}");
                }
                self.selection = None;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
