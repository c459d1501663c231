//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Player, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Square; 3]; 8] = [
    // Rows
    [Square::A1, Square::A2, Square::A3],
    [Square::B1, Square::B2, Square::B3],
    [Square::C1, Square::C2, Square::C3],
    // Columns
    [Square::A1, Square::B1, Square::C1],
    [Square::A2, Square::B2, Square::C2],
    [Square::A3, Square::B3, Square::C3],
    // Diagonals
    [Square::A1, Square::B2, Square::C3],
    [Square::A3, Square::B2, Square::C1],
];

/// Checks if there is a winner on the board.
///
/// Returns the player owning the first uniformly occupied line in
/// [`LINES`] order, `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let mark = board.get(*a);
        if mark != Mark::Empty && mark == board.get(*b) && mark == board.get(*c) {
            mark.player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Square, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, (sq, p)| b.with(*sq, Mark::Occupied(*p)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let board = board_with(&line.map(|sq| (sq, player)));
                assert_eq!(winner(&board), Some(player), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        for line in LINES {
            let board = board_with(&[
                (line[0], Player::X),
                (line[1], Player::X),
                (line[2], Player::O),
            ]);
            assert_eq!(winner(&board), None, "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Square::A1, Player::X), (Square::A2, Player::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_broken_diagonal_has_no_winner() {
        let board = board_with(&[
            (Square::A1, Player::O),
            (Square::A3, Player::O),
            (Square::B2, Player::X),
            (Square::C1, Player::X),
            (Square::C3, Player::O),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable in legal play: row A for X and row C for O.
        let board = board_with(&[
            (Square::A1, Player::X),
            (Square::A2, Player::X),
            (Square::A3, Player::X),
            (Square::C1, Player::O),
            (Square::C2, Player::O),
            (Square::C3, Player::O),
        ]);
        assert_eq!(winner(&board), Some(Player::X));
    }
}
