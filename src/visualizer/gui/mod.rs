//! Native window visualizer built on egui/eframe
//!
//! egui needs the main thread, so the game loop runs on a worker thread.
//! Snapshots travel to the window over one channel and clicked positions
//! come back over another.

mod app;
mod board_view;
mod theme;

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use tracing::error;

pub use app::GomokuApp;

use crate::board::{Board, Player, Pos};
use crate::error::InputError;
use crate::game::Game;

use super::Visualizer;

/// Board state handed from the game thread to the window
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub board: Board,
    pub winner: Option<Player>,
}

impl Snapshot {
    fn empty(size: usize) -> Self {
        Self {
            board: Board::new(size),
            winner: None,
        }
    }
}

/// Game-thread side of the window
pub struct GuiVisualizer {
    snapshots: Sender<Snapshot>,
    clicks: Receiver<Pos>,
    ctx: egui::Context,
}

impl Visualizer for GuiVisualizer {
    fn display_board(&mut self, board: &Board, winner: Option<Player>) {
        let snapshot = Snapshot {
            board: board.clone(),
            winner,
        };
        // A closed window shows up as Interrupted on the next read
        if self.snapshots.send(snapshot).is_ok() {
            self.ctx.request_repaint();
        }
    }

    fn next_position(&mut self) -> Result<Pos, InputError> {
        self.clicks.recv().map_err(|_| InputError::Interrupted)
    }
}

/// Wire a visualizer to a window over a fresh pair of channels
pub fn connect(size: usize, ctx: egui::Context) -> (GuiVisualizer, GomokuApp) {
    let (snapshot_tx, snapshot_rx) = channel();
    let (click_tx, click_rx) = channel();

    let visualizer = GuiVisualizer {
        snapshots: snapshot_tx,
        clicks: click_rx,
        ctx,
    };
    (visualizer, GomokuApp::new(size, snapshot_rx, click_tx))
}

/// Open the window and play one game in it. Returns when the window closes.
pub fn run(size: usize) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| {
            let (visualizer, app) = connect(size, cc.egui_ctx.clone());
            thread::spawn(move || {
                if let Err(err) = Game::new(size, visualizer).play() {
                    error!(%err, "game loop failed");
                }
            });
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_and_clicks_cross_the_channels() {
        let (snapshot_tx, snapshot_rx) = channel::<Snapshot>();
        let (click_tx, click_rx) = channel();
        let mut vis = GuiVisualizer {
            snapshots: snapshot_tx,
            clicks: click_rx,
            ctx: egui::Context::default(),
        };

        let mut board = Board::new(9);
        board.place_stone(Pos::new(4, 4), crate::board::Stone::Black);
        vis.display_board(&board, None);
        let received = snapshot_rx.try_recv().unwrap();
        assert_eq!(received.board, board);
        assert_eq!(received.winner, None);

        click_tx.send(Pos::new(2, 3)).unwrap();
        assert_eq!(vis.next_position().unwrap(), Pos::new(2, 3));

        // Window gone
        drop(click_tx);
        assert!(matches!(vis.next_position(), Err(InputError::Interrupted)));
    }
}
