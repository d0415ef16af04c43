use crate::board::Pos;

/// Why a submitted move was rejected. The game state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("position {0} is already occupied")]
    CellOccupied(Pos),

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors raised while asking a visualizer for the next move.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read a coordinate from {0:?}")]
    Malformed(String),

    #[error("input closed")]
    Interrupted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when building the game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
