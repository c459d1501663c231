//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a tie.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.marks().iter().all(|m| *m != Mark::Empty)
}
