//! Initial layout and move-application tests.

use crate::board::{Board, Color, Piece, Square, BACK_RANK};

#[test]
fn test_pawn_rows() {
    let board = Board::new();
    for col in 0..8 {
        assert_eq!(
            board.piece_at(Square(1, col)),
            Some((Color::Black, Piece::Pawn)),
            "Black pawn expected at row 1, col {col}"
        );
        assert_eq!(
            board.piece_at(Square(6, col)),
            Some((Color::White, Piece::Pawn)),
            "White pawn expected at row 6, col {col}"
        );
    }
}

#[test]
fn test_back_ranks_use_same_column_order_for_both_colors() {
    let board = Board::new();
    let expected = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    assert_eq!(BACK_RANK, expected);
    for (col, &piece) in expected.iter().enumerate() {
        assert_eq!(board.piece_at(Square(0, col)), Some((Color::Black, piece)));
        assert_eq!(board.piece_at(Square(7, col)), Some((Color::White, piece)));
    }
}

#[test]
fn test_kings_start_on_column_four_of_each_back_row() {
    let board = Board::new();
    for color in Color::BOTH {
        assert_eq!(
            board.piece_at(Square(color.back_row(), 4)),
            Some((color, Piece::King))
        );
    }
}

#[test]
fn test_middle_rows_start_empty() {
    let board = Board::new();
    for row in 2..6 {
        for col in 0..8 {
            assert_eq!(board.piece_at(Square(row, col)), None);
        }
    }
}

#[test]
fn test_initial_piece_count() {
    assert_eq!(Board::new().piece_count(), 32);
    assert_eq!(Board::empty().piece_count(), 0);
}

#[test]
fn test_apply_move_transfers_piece() {
    let mut board = Board::new();
    board.apply_move(Square(6, 4), Square(4, 4));
    assert_eq!(board.piece_at(Square(6, 4)), None);
    assert_eq!(
        board.piece_at(Square(4, 4)),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_apply_move_overwrites_destination() {
    // apply_move does not validate; it overwrites whatever is at the
    // destination, even a same-color piece.
    let mut board = Board::new();
    board.apply_move(Square(7, 0), Square(6, 0));
    assert_eq!(
        board.piece_at(Square(6, 0)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(board.piece_at(Square(7, 0)), None);
    assert_eq!(board.piece_count(), 31);
}

#[test]
fn test_apply_move_from_empty_square_clears_destination() {
    let mut board = Board::new();
    board.apply_move(Square(4, 4), Square(6, 4));
    assert_eq!(board.piece_at(Square(6, 4)), None);
}

#[test]
fn test_display_renders_grid() {
    let text = Board::new().to_string();
    assert!(text.contains("| r | n | b | q | k | b | n | r |"));
    assert!(text.contains("| R | N | B | Q | K | B | N | R |"));
    assert!(text.contains("a   b   c   d   e   f   g   h"));
}

#[test]
#[should_panic]
fn test_out_of_range_square_fails_fast() {
    let board = Board::new();
    let _ = board.piece_at(Square(8, 0));
}
