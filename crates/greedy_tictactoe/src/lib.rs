//! Greedy tic-tac-toe - pure game logic
//!
//! A 3x3 board, win and draw rules, a round state machine, and a greedy
//! one-ply computer opponent. No I/O happens here; a driver owns a
//! [`Round`] and asks a [`Strategy`] for the computer's moves.
//!
//! # Example
//!
//! ```
//! use greedy_tictactoe::{Board, Mark, Tier, decide};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut board = Board::new();
//! board.place(0, Mark::Computer).unwrap();
//! board.place(1, Mark::Computer).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let decision = decide(&board, Mark::Computer, Mark::Human, &mut rng).unwrap();
//! assert_eq!(decision.index, 2);
//! assert_eq!(decision.tier, Tier::Win);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod policy;
mod position;
mod round;
mod types;

pub mod rules;

pub use error::{MoveError, PolicyError};
pub use policy::{Decision, FirstAvailable, HeuristicPlayer, Strategy, Tier, choose_move, decide};
pub use position::Position;
pub use round::{Move, Round, RoundStatus};
pub use types::{Board, Mark, Square};
