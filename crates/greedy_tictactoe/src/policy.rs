//! Computer move selection.
//!
//! The policy is a greedy one-ply cascade: take a winning square, else
//! block the opponent's winning square, else prefer the center, then a
//! random corner, then any random square. It looks at single moves only,
//! so a fork (two simultaneous threats) beats it.

use crate::error::PolicyError;
use crate::{Board, Mark, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Cascade level that produced a decision, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Tier {
    /// Completes a line for the deciding side.
    #[display("win")]
    Win,
    /// Takes the square the opponent would win with.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a random free corner.
    #[display("corner")]
    Corner,
    /// Takes any random free square.
    #[display("fallback")]
    Fallback,
}

/// A chosen square and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Board index (0-8).
    pub index: usize,
    /// Cascade level responsible.
    pub tier: Tier,
}

impl Decision {
    fn new(index: usize, tier: Tier) -> Self {
        Self { index, tier }
    }
}

/// Runs the full cascade and reports which tier decided.
///
/// `rng` is only consulted by the corner and fallback tiers.
///
/// # Errors
///
/// Returns [`PolicyError::NoMovesAvailable`] when the board is full.
#[instrument(skip(board, rng))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    self_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Result<Decision, PolicyError> {
    let available = board.available_moves();
    if available.is_empty() {
        return Err(PolicyError::NoMovesAvailable);
    }

    let decision = if let Some(index) = completing_move(board, &available, self_mark) {
        Decision::new(index, Tier::Win)
    } else if let Some(index) = completing_move(board, &available, opponent_mark) {
        Decision::new(index, Tier::Block)
    } else if available.contains(&Position::Center.to_index()) {
        Decision::new(Position::Center.to_index(), Tier::Center)
    } else {
        let corners: Vec<usize> = available
            .iter()
            .copied()
            .filter(|&index| Position::from_index(index).is_some_and(Position::is_corner))
            .collect();
        match corners.choose(rng) {
            Some(&index) => Decision::new(index, Tier::Corner),
            None => {
                let index = *available.choose(rng).ok_or(PolicyError::NoMovesAvailable)?;
                Decision::new(index, Tier::Fallback)
            }
        }
    };

    debug!(index = decision.index, tier = %decision.tier, "Policy decided");
    Ok(decision)
}

/// Chooses a board index for `self_mark`.
///
/// # Errors
///
/// Returns [`PolicyError::NoMovesAvailable`] when the board is full.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    self_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Result<usize, PolicyError> {
    decide(board, self_mark, opponent_mark, rng).map(|decision| decision.index)
}

/// First available index (ascending) where `mark` would complete a line.
fn completing_move(board: &Board, available: &[usize], mark: Mark) -> Option<usize> {
    available.iter().copied().find(|&index| {
        board
            .with_move(index, mark)
            .is_ok_and(|trial| trial.is_winner(mark))
    })
}

/// Something that picks moves for one side.
pub trait Strategy {
    /// Picks a move on `board` for this strategy's side.
    fn choose(&mut self, board: &Board) -> Result<Decision, PolicyError>;

    /// The side this strategy plays.
    fn mark(&self) -> Mark;

    /// Display name.
    fn name(&self) -> &str;
}

/// The greedy cascade bound to a side and a random source.
#[derive(Debug)]
pub struct HeuristicPlayer<R> {
    name: String,
    mark: Mark,
    rng: R,
}

impl<R: Rng> HeuristicPlayer<R> {
    /// Creates a player for `mark` drawing tie-breaks from `rng`.
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<R: Rng> Strategy for HeuristicPlayer<R> {
    fn choose(&mut self, board: &Board) -> Result<Decision, PolicyError> {
        decide(board, self.mark, self.mark.opponent(), &mut self.rng)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks the lowest free square. Deterministic; useful as a sparring partner.
#[derive(Debug, Clone)]
pub struct FirstAvailable {
    name: String,
    mark: Mark,
}

impl FirstAvailable {
    /// Creates a first-available player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl Strategy for FirstAvailable {
    fn choose(&mut self, board: &Board) -> Result<Decision, PolicyError> {
        board
            .available_moves()
            .first()
            .map(|&index| Decision::new(index, Tier::Fallback))
            .ok_or(PolicyError::NoMovesAvailable)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
