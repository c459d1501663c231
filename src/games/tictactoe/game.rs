//! Turn sequencing and move legality for tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::phases::{GameStatus, Outcome};
use super::{Board, Mark, Player, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game of tic-tac-toe: the board plus the moves that produced it.
///
/// `Game` is a value. [`Game::apply_move`] borrows the current game and
/// returns the next one, so a rejected move leaves the caller holding the
/// same, still valid game. X moves when the move count is even, O when it
/// is odd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves played.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places the current player's mark on `square`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a
    /// mark. `self` is untouched either way.
    #[instrument(skip(self), fields(player = %self.current_player(), moves = self.move_count()))]
    pub fn apply_move(&self, square: Square) -> Result<Game, MoveError> {
        if !self.board.is_empty(square) {
            debug!(%square, "Rejected move to occupied square");
            return Err(MoveError::SquareOccupied(square));
        }

        let player = self.current_player();
        let mut history = self.history.clone();
        history.push(Move::new(player, square));
        let next = Game {
            board: self.board.with(square, Mark::Occupied(player)),
            history,
        };

        debug_assert!(
            TicTacToeInvariants::check_all(&next).is_ok(),
            "Invariant violated after {player} played {square}"
        );
        debug!(%square, "Move applied");

        Ok(next)
    }

    /// Computes the end-of-game result, or `None` while play continues.
    ///
    /// A line is checked before fullness, so a full board containing a
    /// line is a win.
    #[instrument(level = "trace", skip(self))]
    pub fn result(&self) -> Option<Outcome> {
        if let Some(player) = rules::winner(&self.board) {
            return Some(Outcome::Winner(player));
        }
        if rules::is_full(&self.board) {
            return Some(Outcome::Tie);
        }
        None
    }

    /// Returns the game's phase.
    pub fn status(&self) -> GameStatus {
        self.result().into()
    }

    /// Returns the empty squares in row-major order.
    pub fn valid_moves(&self) -> Vec<Square> {
        Square::valid_moves(&self.board)
    }

    /// Replays squares from a fresh game, alternating X and O.
    ///
    /// Replay does not stop at a finished game; it fails only on the first
    /// occupied square.
    #[instrument(skip(squares))]
    pub fn replay<I>(squares: I) -> Result<Game, MoveError>
    where
        I: IntoIterator<Item = Square>,
    {
        squares
            .into_iter()
            .try_fold(Game::new(), |game, square| game.apply_move(square))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
