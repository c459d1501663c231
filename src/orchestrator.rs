//! Game orchestration: the read, apply, report loop.

use crate::games::tictactoe::{Game, Outcome, Square};
use crate::view::View;
use anyhow::Result;
use tracing::{debug, info, instrument, warn};

/// Drives one game to completion against a [`View`].
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    game: Game,
}

impl Orchestrator {
    /// Creates an orchestrator holding a fresh game.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Creates an orchestrator resuming an existing game.
    pub fn with_game(game: Game) -> Self {
        Self { game }
    }

    /// Returns the game as it currently stands.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop.
    ///
    /// Bad input and occupied squares are reported and re-prompted. Returns
    /// the outcome once the game ends, or `None` if the view runs out of
    /// input first.
    #[instrument(skip_all)]
    pub fn run<V: View>(&mut self, view: &mut V) -> Result<Option<Outcome>> {
        info!("Starting game");

        if let Some(outcome) = self.game.result() {
            view.report_outcome(&self.game, outcome)?;
            return Ok(Some(outcome));
        }

        view.show_board(&self.game)?;

        loop {
            let Some(text) = view.read_move(&self.game)? else {
                info!(moves = self.game.move_count(), "Input ended before game finished");
                return Ok(None);
            };

            let square = match Square::parse(&text) {
                Ok(square) => square,
                Err(e) => {
                    warn!(input = %text, "Unparseable square");
                    view.report_parse_error(&e)?;
                    continue;
                }
            };

            self.game = match self.game.apply_move(square) {
                Ok(next) => next,
                Err(e) => {
                    warn!(%square, "Illegal move");
                    view.report_illegal_move(&e)?;
                    continue;
                }
            };
            debug!(last = ?self.game.history().last(), status = ?self.game.status(), "Move made");

            if let Some(outcome) = self.game.result() {
                info!(%outcome, moves = self.game.move_count(), "Game over");
                view.report_outcome(&self.game, outcome)?;
                return Ok(Some(outcome));
            }

            view.show_board(&self.game)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveError, ParseSquareError, Player};
    use std::collections::VecDeque;

    /// View that replays scripted input and records what it was told.
    #[derive(Default)]
    struct ScriptedView {
        input: VecDeque<&'static str>,
        boards_shown: usize,
        parse_errors: Vec<String>,
        illegal_moves: Vec<MoveError>,
        outcome: Option<Outcome>,
    }

    impl ScriptedView {
        fn new(input: &[&'static str]) -> Self {
            Self {
                input: input.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl View for ScriptedView {
        fn read_move(&mut self, _game: &Game) -> Result<Option<String>> {
            Ok(self.input.pop_front().map(str::to_string))
        }

        fn show_board(&mut self, _game: &Game) -> Result<()> {
            self.boards_shown += 1;
            Ok(())
        }

        fn report_parse_error(&mut self, error: &ParseSquareError) -> Result<()> {
            self.parse_errors.push(error.input.clone());
            Ok(())
        }

        fn report_illegal_move(&mut self, error: &MoveError) -> Result<()> {
            self.illegal_moves.push(*error);
            Ok(())
        }

        fn report_outcome(&mut self, _game: &Game, outcome: Outcome) -> Result<()> {
            self.outcome = Some(outcome);
            Ok(())
        }
    }

    #[test]
    fn test_run_to_win() {
        let mut view = ScriptedView::new(&["A1", "B1", "A2", "B2", "A3", "C3"]);
        let mut orchestrator = Orchestrator::new();

        let outcome = orchestrator.run(&mut view).unwrap();

        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
        assert_eq!(view.outcome, outcome);
        assert_eq!(orchestrator.game().move_count(), 5);
        // Loop stops at the win; the trailing input is never read.
        assert_eq!(view.input, ["C3"]);
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let mut view = ScriptedView::new(&["a1", "A1", "A1", "Q7", "B2"]);
        let mut orchestrator = Orchestrator::new();

        let outcome = orchestrator.run(&mut view).unwrap();

        assert_eq!(outcome, None);
        assert_eq!(view.parse_errors, ["a1", "Q7"]);
        assert_eq!(view.illegal_moves, [MoveError::SquareOccupied(Square::A1)]);
        assert_eq!(orchestrator.game().move_count(), 2);
        assert_eq!(orchestrator.game().current_player(), Player::X);
    }

    #[test]
    fn test_end_of_input_returns_none() {
        let mut view = ScriptedView::new(&[]);
        let mut orchestrator = Orchestrator::new();

        assert_eq!(orchestrator.run(&mut view).unwrap(), None);
        assert_eq!(view.boards_shown, 1);
        assert_eq!(view.outcome, None);
    }

    #[test]
    fn test_finished_game_reports_immediately() {
        let row_a = [Square::A1, Square::B1, Square::A2, Square::B2, Square::A3];
        let game = Game::replay(row_a).unwrap();
        let mut view = ScriptedView::new(&["C3"]);
        let mut orchestrator = Orchestrator::with_game(game);

        let outcome = orchestrator.run(&mut view).unwrap();

        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
        assert_eq!(view.input, ["C3"]);
    }
}
