//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use strum::IntoEnumIterator;

/// Every line that wins when held by one side.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line held entirely by `mark`.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    let held = Some(Square::Occupied(mark));
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(pos.to_index()) == held))
}

/// Checks whether `mark` holds a complete line.
///
/// Each side is checked on its own; a board where both sides hold a
/// line reports `true` for both.
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Returns the side holding a complete line, checking the human first.
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| is_winner(board, mark))
}
