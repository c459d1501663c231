//! Line-based terminal view.

use crate::games::tictactoe::{Game, MoveError, Outcome, ParseSquareError};
use crate::view::View;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Terminal view over any line reader and writer.
///
/// The binary uses stdin/stdout; tests use in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Creates a console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a new console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> View for Console<R, W> {
    #[instrument(skip_all, fields(player = %game.current_player()))]
    fn read_move(&mut self, game: &Game) -> Result<Option<String>> {
        write!(
            self.output,
            "Player {}, enter a square (e.g. B2): ",
            game.current_player()
        )?;
        self.output.flush().context("Failed to flush prompt")?;

        // Raw bytes so a non-UTF-8 line becomes bad square text, not an I/O error.
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read move")?;
        if read == 0 {
            debug!("Input exhausted");
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn show_board(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output, "\n{}\n", game.board())?;
        Ok(())
    }

    fn report_parse_error(&mut self, error: &ParseSquareError) -> Result<()> {
        writeln!(self.output, "{}. Try again.", error)?;
        Ok(())
    }

    fn report_illegal_move(&mut self, error: &MoveError) -> Result<()> {
        writeln!(self.output, "{}. Try again.", error)?;
        Ok(())
    }

    fn report_outcome(&mut self, game: &Game, outcome: Outcome) -> Result<()> {
        writeln!(self.output, "\n{}\n", game.board())?;
        match outcome {
            Outcome::Winner(player) => writeln!(self.output, "Game over. Player {} wins!", player)?,
            Outcome::Tie => writeln!(self.output, "Game over. It's a tie.")?,
        }
        self.output.flush()?;
        Ok(())
    }
}
