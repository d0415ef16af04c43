//! Gomoku rules engine
//!
//! Freestyle Gomoku on a square board (15x15 by default):
//! - Black moves first, players alternate one stone per turn
//! - Five or more in a row wins (overlines allowed)
//! - Stones are never removed
//!
//! # Architecture
//!
//! - [`board`]: Board, stones, players and coordinates
//! - [`rules`]: Win detection
//! - [`engine`]: The game state machine
//! - [`visualizer`]: Presentation layer (terminal, window, scripted)
//! - [`game`]: Loop joining an engine to a visualizer
//! - [`config`]: Command-line configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, Player, ScriptedVisualizer};
//!
//! // Black builds a row on top, White plays below
//! let moves = [
//!     (0, 0), (5, 0),
//!     (0, 1), (5, 2),
//!     (0, 2), (5, 4),
//!     (0, 3), (5, 6),
//!     (0, 4),
//! ];
//! let mut game = Game::new(15, ScriptedVisualizer::new(moves));
//! assert_eq!(game.play().unwrap(), Some(Player::Black));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod visualizer;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, UiKind};
pub use engine::{GameEngine, Outcome, Status};
pub use error::{ConfigError, InputError, MoveError};
pub use game::Game;
pub use visualizer::{ScriptedVisualizer, TerminalVisualizer, Visualizer};
