//! Serde round-trip tests (serde feature only).

use crate::board::{Board, Color, Piece, Square};

#[test]
fn test_board_json_round_trip() {
    let mut board = Board::new();
    board.apply_move(Square(6, 4), Square(4, 4));
    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn test_piece_and_color_json_representation() {
    assert_eq!(serde_json::to_string(&Piece::Knight).unwrap(), "\"Knight\"");
    assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"Black\"");
}

#[test]
fn test_square_json_round_trip() {
    let sq = Square(6, 4);
    let json = serde_json::to_string(&sq).unwrap();
    let restored: Square = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, sq);
}
