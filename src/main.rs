//! Strictly Tic-Tac-Toe - terminal entry point
//!
//! Runs one interactive two-player game on stdin/stdout.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_tictactoe::{Cli, Console, Orchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Strictly Tic-Tac-Toe");

    let mut console = Console::stdio();
    let outcome = Orchestrator::new().run(&mut console)?;

    info!(?outcome, "Session finished");
    Ok(())
}
