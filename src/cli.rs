//! Command-line interface for strictly_tictactoe.

use clap::Parser;

/// Strictly Tic-Tac-Toe - two players, one terminal
///
/// Players X and O take turns entering squares such as `A1` or `B2`.
/// Rows are lettered A-C from the top, columns numbered 1-3 from the left.
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
#[command(version)]
pub struct Cli {}
