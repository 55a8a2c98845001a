//! Greedy Tic-Tac-Toe - terminal driver
//!
//! Everything between the game logic in [`greedy_tictactoe`] and a
//! person at a keyboard: command-line flags, the TOML config file,
//! localized text, board rendering, input parsing, and the round loop.
//!
//! # Example
//!
//! ```
//! use greedy_tictactoe::{FirstAvailable, Mark};
//! use greedy_tictactoe_cli::{GameConfig, Session};
//! use std::io::Cursor;
//!
//! // The sparring computer always takes the lowest free square, so the
//! // human wins down the middle column and then declines a replay.
//! let input = Cursor::new("5\n2\n8\nn\n");
//! let computer = FirstAvailable::new("Komputer", Mark::Computer);
//! let mut session = Session::new(input, Vec::new(), &GameConfig::default(), computer);
//! let score = session.run().unwrap();
//! assert_eq!(score.rounds(), 1);
//! assert_eq!(score.human_wins, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod messages;
mod render;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use input::{InputError, parse_position, parse_yes};
pub use messages::{Language, Messages};
pub use render::{render_board, render_guide};
pub use session::{Scoreboard, Session, SessionError};
