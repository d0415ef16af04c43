//! Game loop joining one engine to one visualizer

use tracing::{info, warn};

use crate::board::Player;
use crate::engine::{GameEngine, Outcome};
use crate::error::InputError;
use crate::visualizer::Visualizer;

/// A single game session
pub struct Game<V> {
    engine: GameEngine,
    visualizer: V,
}

impl<V: Visualizer> Game<V> {
    pub fn new(size: usize, visualizer: V) -> Self {
        Self::with_engine(GameEngine::new(size), visualizer)
    }

    pub fn with_engine(engine: GameEngine, visualizer: V) -> Self {
        Self { engine, visualizer }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    pub fn into_parts(self) -> (GameEngine, V) {
        (self.engine, self.visualizer)
    }

    /// Play until someone wins or the visualizer stops supplying moves.
    ///
    /// Returns the winner, or `None` if the game was interrupted. Rejected
    /// moves and malformed input are logged and the next move is requested.
    pub fn play(&mut self) -> Result<Option<Player>, InputError> {
        info!(size = self.engine.size(), "game started");
        self.visualizer.display_board(self.engine.board(), None);

        loop {
            let pos = match self.visualizer.next_position() {
                Ok(pos) => pos,
                Err(InputError::Malformed(text)) => {
                    warn!(input = %text, "malformed input, try again");
                    continue;
                }
                Err(InputError::Interrupted) => {
                    info!("game terminated");
                    return Ok(None);
                }
                Err(err) => return Err(err),
            };

            match self.engine.submit_move(pos) {
                Ok(Outcome::Open) => {
                    self.visualizer.display_board(self.engine.board(), None);
                }
                Ok(Outcome::Won(winner)) => {
                    self.visualizer.display_board(self.engine.board(), Some(winner));
                    info!(%winner, "player wins");
                    return Ok(Some(winner));
                }
                Err(err) => {
                    warn!(%err, player = %self.engine.current_player(), "invalid move, try again");
                }
            }
        }
    }
}
