//! Chess board representation and move-legality rules.
//!
//! The board is a plain 8x8 grid of optional pieces; legality is a pure
//! predicate over (board, source, destination). Move application is
//! unconditional and separate from validation, so the caller decides when
//! a move actually happens.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let mut board = Board::new();
//! // White pawn e2-e4
//! assert!(board.is_valid_move(Square(6, 4), Square(4, 4)));
//! board.apply_move(Square(6, 4), Square(4, 4));
//! ```

mod builder;
mod error;
mod placement;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PlacementError, SquareError};
pub use state::Board;
pub use types::{Color, Piece, Square};

#[cfg(test)]
pub(crate) use state::BACK_RANK;
