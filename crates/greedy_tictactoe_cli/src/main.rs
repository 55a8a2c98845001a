//! Greedy Tic-Tac-Toe - interactive game
//!
//! The human plays X against the greedy computer O in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use greedy_tictactoe::{HeuristicPlayer, Mark};
use greedy_tictactoe_cli::{Cli, GameConfig, Messages, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.language, cli.seed, cli.no_guide);
    info!(?config, "Starting greedy tic-tac-toe");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let messages = Messages::new(*config.language());
    let computer = HeuristicPlayer::new(messages.computer_name(), Mark::Computer, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &config, computer);
    session.run()?;

    Ok(())
}
