//! One round of play, from an empty board to a terminal state.

use crate::error::MoveError;
use crate::{Board, Mark, rules};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves can still be made.
    InProgress,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled up with no line completed.
    Draw,
}

impl RoundStatus {
    /// Whether the round has ended.
    pub fn is_terminal(self) -> bool {
        self != RoundStatus::InProgress
    }

    /// The winning side, if the round ended in a win.
    pub fn winner(self) -> Option<Mark> {
        match self {
            RoundStatus::HumanWon => Some(Mark::Human),
            RoundStatus::ComputerWon => Some(Mark::Computer),
            RoundStatus::InProgress | RoundStatus::Draw => None,
        }
    }

    fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Human => RoundStatus::HumanWon,
            Mark::Computer => RoundStatus::ComputerWon,
        }
    }
}

/// A placement made during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Side that moved.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

/// Board plus status and history for a single round.
///
/// The human always moves first. Turns alternate after every accepted
/// placement until the status becomes terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    status: RoundStatus,
    history: Vec<Move>,
}

impl Round {
    /// Starts a round on an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: RoundStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Side expected to move next.
    pub fn to_move(&self) -> Mark {
        self.board.turn()
    }

    /// Placements so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the mark of the side to move at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RoundOver`] once the round is terminal, or the
    /// board's own error for an invalid index. Nothing changes on error.
    #[instrument(skip(self), fields(mark = %self.board.turn()))]
    pub fn play(&mut self, index: usize) -> Result<RoundStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::RoundOver);
        }

        let mark = self.board.turn();
        self.board.place(index, mark)?;
        self.history.push(Move { mark, index });
        self.update_status(mark);

        if self.status.is_terminal() {
            info!(
                status = ?self.status,
                line = ?rules::winning_line(&self.board, mark),
                moves = self.history.len(),
                "Round finished"
            );
        } else {
            self.board.pass_turn();
        }
        Ok(self.status)
    }

    /// Returns to an empty board with the human to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = RoundStatus::InProgress;
        self.history.clear();
    }

    /// Only the side that just moved can have completed a line.
    fn update_status(&mut self, mover: Mark) {
        if self.board.is_winner(mover) {
            self.status = RoundStatus::won_by(mover);
        } else if self.board.is_full() {
            self.status = RoundStatus::Draw;
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
