//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the board must hold X marks
/// for exactly the X turns and O marks for exactly the O turns.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let count = |player| {
            game.board()
                .marks()
                .iter()
                .filter(|m| m.player() == Some(player))
                .count()
        };
        count(Player::X) == history.len().div_ceil(2) && count(Player::O) == history.len() / 2
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
