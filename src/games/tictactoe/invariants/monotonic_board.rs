//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Game, Mark};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must place every mark on an
/// empty square and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.square) {
                return false;
            }
            reconstructed = reconstructed.with(mov.square, Mark::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board is reproduced by history and no square is played twice"
    }
}
