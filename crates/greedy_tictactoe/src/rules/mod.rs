//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board). Rules are kept apart from
//! board storage so the policy and the round state machine share one
//! definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, is_winner, winner, winning_line};
