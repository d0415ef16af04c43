//! Presentation layer
//!
//! The engine never renders anything itself. A [`Visualizer`] shows board
//! snapshots and supplies moves; the game loop in [`crate::game`] drives it.

pub mod gui;
pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedVisualizer;
pub use terminal::TerminalVisualizer;

use crate::board::{Board, Player, Pos};
use crate::error::InputError;

/// Show board state and collect moves
pub trait Visualizer {
    /// Render the board, announcing `winner` if the game just ended
    fn display_board(&mut self, board: &Board, winner: Option<Player>);

    /// Block until the next move is available.
    ///
    /// The returned position is untrusted; it may be off the board or on an
    /// occupied cell. `InputError::Interrupted` ends the game loop.
    fn next_position(&mut self) -> Result<Pos, InputError>;
}

impl<V: Visualizer + ?Sized> Visualizer for Box<V> {
    fn display_board(&mut self, board: &Board, winner: Option<Player>) {
        (**self).display_board(board, winner)
    }

    fn next_position(&mut self) -> Result<Pos, InputError> {
        (**self).next_position()
    }
}
