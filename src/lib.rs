pub mod board;
pub mod game;
pub mod sync;

pub use board::{Board, BoardBuilder, Color, Piece, Square};
pub use game::GameState;
pub use sync::SharedGame;
