//! Gomoku
//!
//! Two players on one machine, either in a window or in the terminal.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::visualizer::gui;
use gomoku::{Game, GameConfig, TerminalVisualizer, UiKind, DEFAULT_BOARD_SIZE};

/// Play Gomoku (five in a row) against another person.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player Gomoku")]
struct Cli {
    /// Cells per side of the board
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Interface to play in
    #[arg(long, value_enum, default_value_t = UiKind::Gui)]
    ui: UiKind,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.size, cli.ui)?;

    match config.ui {
        UiKind::Gui => {
            gui::run(config.board_size).map_err(|err| anyhow!("failed to open window: {err}"))?;
        }
        UiKind::Terminal => {
            println!("Welcome to Gomoku!");
            let mut game = Game::new(config.board_size, TerminalVisualizer::stdio());
            if game.play()?.is_none() {
                println!("\nGame terminated.");
            }
        }
    }
    Ok(())
}
