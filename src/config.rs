use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;
use crate::rules::WIN_LENGTH;

/// Largest board the GUI can label (columns A-Z)
pub const MAX_BOARD_SIZE: usize = 26;

/// Which visualizer drives the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UiKind {
    /// Window with a clickable board
    #[default]
    Gui,
    /// Text board on stdout, coordinates typed on stdin
    Terminal,
}

/// Game configuration assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub ui: UiKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            ui: UiKind::default(),
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration.
    pub fn new(board_size: usize, ui: UiKind) -> Result<Self, ConfigError> {
        let config = GameConfig { board_size, ui };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board size must be at least {WIN_LENGTH}"
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board size must be at most {MAX_BOARD_SIZE}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.ui, UiKind::Gui);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_size_limits() {
        assert!(GameConfig::new(5, UiKind::Terminal).is_ok());
        assert!(GameConfig::new(26, UiKind::Terminal).is_ok());

        let err = GameConfig::new(4, UiKind::Terminal).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: board size must be at least 5"
        );
        assert!(GameConfig::new(27, UiKind::Gui).is_err());
    }
}
