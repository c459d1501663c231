//! Strictly Tic-Tac-Toe - a two-player terminal game
//!
//! The rules live in [`games::tictactoe`] as pure value types: a [`Board`]
//! of nine named [`Square`]s, and a [`Game`] that applies moves and
//! reports the [`Outcome`]. The [`Orchestrator`] runs the read, apply,
//! report loop against any [`View`]; [`Console`] is the terminal one.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, Outcome, Player, Square};
//!
//! let game = Game::replay([Square::A1, Square::B1, Square::A2, Square::B2, Square::A3])?;
//! assert_eq!(game.result(), Some(Outcome::Winner(Player::X)));
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
pub mod games;
mod orchestrator;
mod view;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Terminal loop
pub use console::Console;
pub use orchestrator::Orchestrator;
pub use view::View;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, LINES, Mark, Move, MoveError, Outcome, ParseSquareError, Player,
    Square, is_full, winner,
};
