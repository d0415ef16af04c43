//! Headless visualizer replaying a fixed list of moves

use std::collections::VecDeque;

use crate::board::{Board, Player, Pos};
use crate::error::InputError;

use super::Visualizer;

/// Feeds queued moves and records every snapshot it is shown.
///
/// Running out of moves reports `InputError::Interrupted`.
#[derive(Debug, Default)]
pub struct ScriptedVisualizer {
    moves: VecDeque<Pos>,
    /// Snapshots in display order
    pub frames: Vec<(Board, Option<Player>)>,
}

impl ScriptedVisualizer {
    pub fn new<I, P>(moves: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pos>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            frames: Vec::new(),
        }
    }

    /// Moves not consumed yet
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    pub fn last_frame(&self) -> Option<&(Board, Option<Player>)> {
        self.frames.last()
    }
}

impl Visualizer for ScriptedVisualizer {
    fn display_board(&mut self, board: &Board, winner: Option<Player>) {
        self.frames.push((board.clone(), winner));
    }

    fn next_position(&mut self) -> Result<Pos, InputError> {
        self.moves.pop_front().ok_or(InputError::Interrupted)
    }
}
