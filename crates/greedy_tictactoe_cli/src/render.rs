//! Text rendering of the board.

use greedy_tictactoe::{Board, Position};

const SEPARATOR: &str = "-----------";

/// Formats the board as a 3x3 grid, one row per line.
///
/// ```text
///  X | O |
/// -----------
///    | X |
/// -----------
///  O |   |
/// ```
pub fn render_board(board: &Board) -> String {
    grid(|index| {
        board
            .get(index)
            .map(|square| square.symbol())
            .unwrap_or(' ')
            .to_string()
    })
}

/// The same grid with each square showing its 1-9 number.
pub fn render_guide() -> String {
    grid(|index| {
        Position::from_index(index)
            .map(|pos| pos.to_one_based().to_string())
            .unwrap_or_default()
    })
}

fn grid(cell: impl Fn(usize) -> String) -> String {
    let separator = format!("\n{SEPARATOR}\n");
    (0..3)
        .map(|row| {
            let cells: Vec<String> = (0..3).map(|col| cell(row * 3 + col)).collect();
            format!(" {} | {} | {} ", cells[0], cells[1], cells[2])
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
