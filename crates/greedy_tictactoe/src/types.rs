//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side occupying a square.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Mark {
    /// The human player, shown as X. Moves first.
    #[display("Human")]
    Human,
    /// The computer player, shown as O.
    #[display("Computer")]
    Computer,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }

    /// Board symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a side.
    Occupied(Mark),
}

impl Square {
    /// Board symbol, or a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// 3x3 board plus the side expected to move next.
///
/// `Board` is `Copy`: trial placements are made on a copy, so the
/// original can never observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Side expected to move next. `place` itself ignores this.
    turn: Mark,
}

impl Board {
    /// Creates an empty board with the human to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            turn: Mark::Human,
        }
    }

    /// Creates a board from explicit squares.
    pub fn from_squares(squares: [Square; 9], turn: Mark) -> Self {
        Self { squares, turn }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Side expected to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Hands the turn to the other side.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index above 8 and
    /// [`MoveError::Occupied`] for a non-empty square. The board is left
    /// untouched in both cases.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.squares.get_mut(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(MoveError::Occupied(index)),
            Some(square) => {
                *square = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Self, MoveError> {
        let mut trial = *self;
        trial.place(index, mark)?;
        Ok(trial)
    }

    /// Checks whether `mark` holds any complete line.
    pub fn is_winner(&self, mark: Mark) -> bool {
        rules::is_winner(self, mark)
    }

    /// Returns the side holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Clears every square and gives the first move back to the human.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
