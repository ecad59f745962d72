//! Core board types.

mod piece;
mod square;

pub use piece::{Color, Piece};
pub use square::Square;
