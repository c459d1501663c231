//! Tic-tac-toe rules and game state.

pub mod action;
mod game;
pub mod invariants;
pub mod phases;
pub mod rules;
mod square;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use phases::{GameStatus, Outcome};
pub use rules::{LINES, is_full, winner};
pub use square::{ParseSquareError, Square};
pub use types::{Board, Mark, Player};
