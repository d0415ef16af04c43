//! Main window for the Gomoku GUI

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::board::{Player, Pos, Stone};
use crate::rules::find_five_line;

use super::board_view::BoardView;
use super::theme::*;
use super::Snapshot;

/// Window showing the latest snapshot from the game thread
pub struct GomokuApp {
    board_view: BoardView,
    snapshot: Snapshot,
    winning_line: Option<Vec<Pos>>,
    snapshots: Receiver<Snapshot>,
    clicks: Sender<Pos>,
    /// Game thread has hung up
    disconnected: bool,
}

impl GomokuApp {
    pub fn new(size: usize, snapshots: Receiver<Snapshot>, clicks: Sender<Pos>) -> Self {
        Self {
            board_view: BoardView::default(),
            snapshot: Snapshot::empty(size),
            winning_line: None,
            snapshots,
            clicks,
            disconnected: false,
        }
    }

    /// Pull every pending snapshot, keeping the newest
    fn receive_snapshots(&mut self) {
        loop {
            match self.snapshots.try_recv() {
                Ok(snapshot) => {
                    self.winning_line = snapshot
                        .winner
                        .and_then(|winner| find_five_line(&snapshot.board, winner));
                    self.snapshot = snapshot;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
    }

    /// Black moves whenever both sides have placed the same number of stones
    fn player_to_move(&self) -> Player {
        let board = &self.snapshot.board;
        if board.count(Stone::Black) > board.count(Stone::White) {
            Player::White
        } else {
            Player::Black
        }
    }

    fn render_side_panel(&self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.snapshot.board.size();
            ui.label(RichText::new(format!("{size}x{size}, five in a row")).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            match self.snapshot.winner {
                Some(winner) => {
                    ui.label(
                        RichText::new(format!("Player {winner} wins!"))
                            .size(18.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
                None if self.disconnected => {
                    ui.label(RichText::new("Game terminated").size(16.0).color(TEXT_SECONDARY));
                }
                None => {
                    let to_move = self.player_to_move();
                    ui.label(RichText::new("To move").size(11.0).color(TEXT_MUTED));
                    ui.label(RichText::new(to_move.name()).size(18.0).strong().color(TEXT_PRIMARY));
                }
            }
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Stones played: {}", self.snapshot.board.stone_count()))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.receive_snapshots();
        self.render_side_panel(ctx);

        let to_move = self.player_to_move();
        let clicked = CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let finished = self.disconnected || self.snapshot.winner.is_some();
                let line = self.winning_line.as_deref();
                let clicked = self.board_view.show(ui, &self.snapshot.board, to_move, line);
                clicked.filter(|_| !finished)
            })
            .inner;

        if let Some(pos) = clicked {
            if self.clicks.send(pos).is_err() {
                self.disconnected = true;
            }
        }
    }
}
