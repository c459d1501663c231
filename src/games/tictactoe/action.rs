//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The game keeps them as its
//! history so a position can be audited or replayed.

use super::{Player, Square};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The square where the player places their mark.
    pub square: Square,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, square: Square) -> Self {
        Self { player, square }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.square)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Square),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Player::O, Square::C2).to_string(), "O -> C2");
    }
}
