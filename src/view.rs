//! The seam between the game loop and whatever shows the game to people.

use crate::games::tictactoe::{Game, MoveError, Outcome, ParseSquareError};
use anyhow::Result;

/// Something that can ask for moves and show the game.
///
/// The orchestrator only talks to this trait, so the loop runs the same
/// against a terminal or a scripted test double.
pub trait View {
    /// Reads the next move as raw, trimmed text.
    ///
    /// Returns `Ok(None)` when input is exhausted.
    fn read_move(&mut self, game: &Game) -> Result<Option<String>>;

    /// Shows the current board.
    fn show_board(&mut self, game: &Game) -> Result<()>;

    /// Tells the player their text did not name a square.
    fn report_parse_error(&mut self, error: &ParseSquareError) -> Result<()>;

    /// Tells the player the square is taken.
    fn report_illegal_move(&mut self, error: &MoveError) -> Result<()>;

    /// Shows the final board and announces the outcome.
    fn report_outcome(&mut self, game: &Game, outcome: Outcome) -> Result<()>;
}
