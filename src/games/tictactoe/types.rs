//! Core domain types for tic-tac-toe.

use super::square::Square;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The occupant of a square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Character shown for this mark when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Occupied(Player::X) => 'X',
            Mark::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a `Copy` value: [`Board::with`] returns an updated copy and
/// never touches the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed by [`Square::index`].
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given square.
    pub fn get(&self, square: Square) -> Mark {
        self.cells[square.index()]
    }

    /// Returns a copy of the board with `square` set to `mark`.
    #[must_use]
    pub fn with(mut self, square: Square, mark: Mark) -> Self {
        self.cells[square.index()] = mark;
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Mark::Empty
    }

    /// Returns all cells in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|m| **m != Mark::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as a labelled grid:
    ///
    /// ```text
    ///    1   2   3
    /// A  X | O |
    ///   ---+---+---
    /// B    | X |
    ///   ---+---+---
    /// C    |   | O
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   1   2   3")?;
        for (row, letter) in ['A', 'B', 'C'].into_iter().enumerate() {
            if row > 0 {
                write!(f, "\n  ---+---+---")?;
            }
            let cell = |col: usize| self.cells[row * 3 + col].symbol();
            write!(f, "\n{}  {} | {} | {}", letter, cell(0), cell(1), cell(2))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Square::ALL.iter().all(|sq| board.is_empty(*sq)));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let before = Board::new();
        let after = before.with(Square::B2, Mark::Occupied(Player::X));
        assert!(before.is_empty(Square::B2));
        assert_eq!(after.get(Square::B2), Mark::Occupied(Player::X));
    }

    #[test]
    fn test_render_empty_board() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   1   2   3",
                "A    |   |  ",
                "  ---+---+---",
                "B    |   |  ",
                "  ---+---+---",
                "C    |   |  ",
            ]
        );
    }

    #[test]
    fn test_render_places_marks_by_label() {
        let board = Board::new()
            .with(Square::A1, Mark::Occupied(Player::X))
            .with(Square::A2, Mark::Occupied(Player::O))
            .with(Square::C3, Mark::Occupied(Player::O));
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "A  X | O |  ");
        assert_eq!(lines[5], "C    |   | O");
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
