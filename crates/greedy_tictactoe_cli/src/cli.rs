//! Command-line interface for greedy_tictactoe.

use crate::messages::Language;
use clap::Parser;
use std::path::PathBuf;

/// Greedy Tic-Tac-Toe - play X against a one-ply computer opponent
#[derive(Parser, Debug)]
#[command(name = "greedy_tictactoe")]
#[command(about = "Play tic-tac-toe against a greedy computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "greedy_tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Language of the game text (id or en)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Do not print the numbered position guide
    #[arg(long)]
    pub no_guide: bool,
}
