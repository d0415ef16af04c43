//! Plain-text board and line-based prompts

use std::io::{self, BufRead, Write};

use crate::board::{Board, Player, Pos};
use crate::error::InputError;

use super::Visualizer;

/// Prints the board as text and reads coordinates line by line.
///
/// Generic over its streams so tests can feed canned input.
pub struct TerminalVisualizer<R, W> {
    input: R,
    output: W,
}

impl TerminalVisualizer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalVisualizer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt and read one integer
    fn read_coordinate(&mut self, prompt: &str) -> Result<i32, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Interrupted);
        }
        let text = line.trim();
        text.parse()
            .map_err(|_| InputError::Malformed(text.to_string()))
    }

    fn write_board(&mut self, board: &Board, winner: Option<Player>) -> io::Result<()> {
        write!(self.output, "{board}")?;
        if let Some(player) = winner {
            writeln!(self.output, "Player {} wins!", player.stone().symbol())?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Visualizer for TerminalVisualizer<R, W> {
    fn display_board(&mut self, board: &Board, winner: Option<Player>) {
        if let Err(err) = self.write_board(board, winner) {
            tracing::warn!(%err, "failed to print board");
        }
    }

    fn next_position(&mut self) -> Result<Pos, InputError> {
        let row = self.read_coordinate("Enter the row: ")?;
        let col = self.read_coordinate("Enter the column: ")?;
        Ok(Pos::new(row, col))
    }
}
