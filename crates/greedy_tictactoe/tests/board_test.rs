//! Tests for board state queries and placement.

use greedy_tictactoe::{Board, Mark, MoveError, Square};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    assert_eq!(board.turn(), Mark::Human);
    assert!(!board.is_full());
}

#[test]
fn test_place_sets_square() {
    let mut board = Board::new();
    board.place(4, Mark::Human).expect("center is free");
    assert_eq!(board.get(4), Some(Square::Occupied(Mark::Human)));
    assert!(!board.is_empty(4));
    assert_eq!(board.available_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_place_is_side_agnostic() {
    let mut board = Board::new();
    board.place(0, Mark::Computer).unwrap();
    board.place(1, Mark::Computer).unwrap();
    assert_eq!(board.turn(), Mark::Human);
    assert_eq!(board.get(1), Some(Square::Occupied(Mark::Computer)));
}

#[test]
fn test_place_occupied_square_rejected_without_change() {
    let mut board = Board::new();
    board.place(3, Mark::Human).unwrap();
    let before = board;

    let result = board.place(3, Mark::Computer);
    assert_eq!(result, Err(MoveError::Occupied(3)));
    assert_eq!(board, before);

    let result = board.place(3, Mark::Human);
    assert_eq!(result, Err(MoveError::Occupied(3)));
    assert_eq!(board, before);
}

#[test]
fn test_place_out_of_range_rejected_without_change() {
    let mut board = Board::new();
    board.place(8, Mark::Computer).unwrap();
    let before = board;

    for index in [9, 10, usize::MAX] {
        assert_eq!(board.place(index, Mark::Human), Err(MoveError::OutOfRange(index)));
        assert_eq!(board, before);
    }
    assert_eq!(board.get(9), None);
    assert!(!board.is_empty(9));
}

#[test]
fn test_with_move_leaves_original_untouched() {
    let board = Board::new();
    let trial = board.with_move(4, Mark::Computer).unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(trial.get(4), Some(Square::Occupied(Mark::Computer)));
}

#[test]
fn test_winner_reports_line_holder() {
    let mut board = Board::new();
    assert_eq!(board.winner(), None);
    for index in [2, 4, 6] {
        board.place(index, Mark::Computer).unwrap();
    }
    board.place(0, Mark::Human).unwrap();
    assert_eq!(board.winner(), Some(Mark::Computer));
    assert!(!board.is_winner(Mark::Human));
}

#[test]
fn test_full_iff_no_available_moves() {
    let mut board = Board::new();
    let mut mark = Mark::Human;
    for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        assert_eq!(board.is_full(), board.available_moves().is_empty());
        board.place(index, mark).unwrap();
        mark = mark.opponent();
    }
    assert!(board.is_full());
    assert!(board.available_moves().is_empty());
}

#[test]
fn test_reset_clears_everything() {
    let mut board = Board::new();
    board.place(0, Mark::Human).unwrap();
    board.place(4, Mark::Computer).unwrap();
    board.place(8, Mark::Human).unwrap();
    board.pass_turn();

    board.reset();

    assert_eq!(board, Board::new());
    assert_eq!(board.available_moves(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(board.turn(), Mark::Human);
}

#[test]
fn test_pass_turn_alternates() {
    let mut board = Board::new();
    board.pass_turn();
    assert_eq!(board.turn(), Mark::Computer);
    board.pass_turn();
    assert_eq!(board.turn(), Mark::Human);
}

#[test]
fn test_symbols() {
    assert_eq!(Mark::Human.symbol(), 'X');
    assert_eq!(Mark::Computer.symbol(), 'O');
    assert_eq!(Square::Empty.symbol(), ' ');
    assert_eq!(Square::Occupied(Mark::Computer).symbol(), 'O');
}
