//! Square identifiers for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A named square on the board: row letter (A-C) and column digit (1-3).
///
/// Variants are declared in row-major order, so the declaration order
/// matches [`Square::index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
pub enum Square {
    /// Top row, left column.
    A1,
    /// Top row, center column.
    A2,
    /// Top row, right column.
    A3,
    /// Middle row, left column.
    B1,
    /// Middle row, center column.
    B2,
    /// Middle row, right column.
    B3,
    /// Bottom row, left column.
    C1,
    /// Bottom row, center column.
    C2,
    /// Bottom row, right column.
    C3,
}

/// The text did not name one of the nine squares.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid square {input:?}: expected a row A-C followed by a column 1-3, e.g. B2")]
pub struct ParseSquareError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl std::error::Error for ParseSquareError {}

impl Square {
    /// All 9 squares in row-major order.
    pub const ALL: [Square; 9] = [
        Square::A1,
        Square::A2,
        Square::A3,
        Square::B1,
        Square::B2,
        Square::B3,
        Square::C1,
        Square::C2,
        Square::C3,
    ];

    /// Parses an exact, case-sensitive label such as `"B2"`.
    ///
    /// No trimming is done here; callers hand over already-trimmed input.
    #[instrument(level = "trace")]
    pub fn parse(text: &str) -> Result<Square, ParseSquareError> {
        Square::iter()
            .find(|sq| <&'static str>::from(*sq) == text)
            .ok_or_else(|| ParseSquareError {
                input: text.to_string(),
            })
    }

    /// The square's label, e.g. `"C1"`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Converts the square to a board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a square from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row (A = 0).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column (1 = 0).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Filters squares by board state - returns only empty squares.
    #[instrument(level = "trace", skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Square> {
        Self::ALL
            .iter()
            .copied()
            .filter(|sq| board.is_empty(*sq))
            .collect()
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}
