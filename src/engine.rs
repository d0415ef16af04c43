//! Game state machine
//!
//! [`GameEngine`] owns the board, validates moves, alternates turns and
//! detects wins. It performs no I/O; moves come in as plain coordinates and
//! results go out as return values.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, Outcome, Player, Pos};
//!
//! let mut engine = GameEngine::new(15);
//! assert_eq!(engine.submit_move(Pos::new(7, 7)), Ok(Outcome::Open));
//! assert_eq!(engine.current_player(), Player::White);
//! assert!(engine.submit_move(Pos::new(7, 7)).is_err());
//! ```

use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::error::MoveError;
use crate::rules::has_five_at_pos;

/// State of the game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game continues
    Open,
    /// Terminal: the player completed a line
    Won(Player),
}

/// Collapsed result of [`GameEngine::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    WinBlack,
    WinWhite,
    Invalid,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Open => Status::Open,
            Outcome::Won(Player::Black) => Status::WinBlack,
            Outcome::Won(Player::White) => Status::WinWhite,
        }
    }
}

/// Rules engine for a single game
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl GameEngine {
    /// Start a game on an empty `size`x`size` board with Black to move
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::Black,
            outcome: Outcome::Open,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Player to move, or the winner once the game is over
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Open
    }

    /// Check a move against bounds and occupancy, reporting the reason.
    pub fn validate_move(&self, pos: Pos) -> Result<(), MoveError> {
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds {
                pos,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        Ok(())
    }

    /// Position is on the board and empty
    #[inline]
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.validate_move(pos).is_ok()
    }

    /// Place the current player's stone.
    ///
    /// Does not check for a win or switch turns. Returns false, leaving the
    /// board untouched, if the move is invalid.
    pub fn place_stone(&mut self, pos: Pos) -> bool {
        self.is_valid_move(pos) && self.board.place_stone(pos, self.current_player.stone())
    }

    /// Would the current player win with a stone at `pos`?
    ///
    /// Meant to be called right after placing that stone.
    pub fn check_win(&self, pos: Pos) -> bool {
        has_five_at_pos(&self.board, pos, self.current_player)
    }

    /// Hand the turn to the other player
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Validate, place, check for a win and either end the game or pass the
    /// turn. A rejected move changes nothing; the same player moves again.
    pub fn submit_move(&mut self, pos: Pos) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        self.validate_move(pos)?;

        let player = self.current_player;
        self.board.place_stone(pos, player.stone());
        debug!(%pos, %player, "stone placed");

        if self.check_win(pos) {
            info!(%pos, %player, "five in a row");
            self.outcome = Outcome::Won(player);
        } else {
            self.switch_player();
        }
        Ok(self.outcome)
    }

    /// [`submit_move`](Self::submit_move) without the rejection reason
    pub fn make_move(&mut self, pos: Pos) -> Status {
        match self.submit_move(pos) {
            Ok(outcome) => outcome.into(),
            Err(_) => Status::Invalid,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(crate::board::DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use proptest::prelude::*;

    /// Black one move away from a horizontal five on row 0
    fn near_win_engine() -> GameEngine {
        let mut engine = GameEngine::new(15);
        for i in 0..4 {
            assert!(engine.place_stone(Pos::new(0, i)));
        }
        engine
    }

    /// Black on the main diagonal up to (3, 3), White next to it
    fn mixed_board_engine() -> GameEngine {
        let mut engine = GameEngine::new(15);
        let moves = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3), (3, 3)];
        for (r, c) in moves {
            assert!(engine.place_stone(Pos::new(r, c)));
            engine.switch_player();
        }
        assert_eq!(engine.current_player(), Player::White);
        engine.switch_player();
        engine
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new(15);
        assert_eq!(engine.size(), 15);
        assert_eq!(engine.board().rows().count(), 15);
        assert!(engine.board().rows().all(|row| row.len() == 15));
        assert!(engine.board().is_board_empty());
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.outcome(), Outcome::Open);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(GameEngine::default().size(), 15);
    }

    #[test]
    fn test_invalid_moves() {
        let engine = mixed_board_engine();
        assert!(!engine.is_valid_move(Pos::new(0, 0)));
        assert!(!engine.is_valid_move(Pos::new(-1, -1)));
        assert!(!engine.is_valid_move(Pos::new(15, 15)));
        assert!(engine.is_valid_move(Pos::new(0, 2)));
        assert!(engine.is_valid_move(Pos::new(14, 14)));
    }

    #[test]
    fn test_validate_move_reasons() {
        let engine = mixed_board_engine();
        assert_eq!(
            engine.validate_move(Pos::new(15, 3)),
            Err(MoveError::OutOfBounds {
                pos: Pos::new(15, 3),
                size: 15
            })
        );
        assert_eq!(
            engine.validate_move(Pos::new(1, 1)),
            Err(MoveError::CellOccupied(Pos::new(1, 1)))
        );
    }

    #[test]
    fn test_mixed_board_place() {
        let mut engine = mixed_board_engine();
        assert!(engine.is_valid_move(Pos::new(0, 2)));
        assert!(engine.place_stone(Pos::new(0, 2)));
        assert_eq!(engine.board().get(Pos::new(0, 2)), Some(Stone::Black));
        // place_stone does not pass the turn
        assert_eq!(engine.current_player(), Player::Black);
    }

    #[test]
    fn test_switch_player() {
        let mut engine = mixed_board_engine();
        assert_eq!(engine.current_player(), Player::Black);
        engine.switch_player();
        assert_eq!(engine.current_player(), Player::White);
        engine.switch_player();
        assert_eq!(engine.current_player(), Player::Black);
    }

    #[test]
    fn test_near_win_horizontal() {
        let mut engine = near_win_engine();
        assert!(engine.place_stone(Pos::new(0, 4)));
        assert!(engine.check_win(Pos::new(0, 4)));
    }

    #[test]
    fn test_diagonal_win() {
        let mut engine = GameEngine::new(15);
        for i in 0..4 {
            engine.place_stone(Pos::new(i, i));
        }
        assert!(engine.place_stone(Pos::new(4, 4)));
        assert!(engine.check_win(Pos::new(4, 4)));
    }

    #[test]
    fn test_no_win_yet() {
        let engine = mixed_board_engine();
        assert!(!engine.check_win(Pos::new(3, 3)));
    }

    #[test]
    fn test_check_win_uses_current_player() {
        let mut engine = near_win_engine();
        engine.place_stone(Pos::new(0, 4));
        engine.switch_player();
        assert!(!engine.check_win(Pos::new(0, 4)));
    }

    #[test]
    fn test_submit_alternates_turns() {
        let mut engine = GameEngine::new(15);
        assert_eq!(engine.submit_move(Pos::new(7, 7)), Ok(Outcome::Open));
        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.submit_move(Pos::new(7, 8)), Ok(Outcome::Open));
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.board().get(Pos::new(7, 7)), Some(Stone::Black));
        assert_eq!(engine.board().get(Pos::new(7, 8)), Some(Stone::White));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut engine = GameEngine::new(15);
        engine.submit_move(Pos::new(7, 7)).unwrap();
        let before = engine.board().clone();

        assert_eq!(
            engine.submit_move(Pos::new(7, 7)),
            Err(MoveError::CellOccupied(Pos::new(7, 7)))
        );
        assert!(matches!(
            engine.submit_move(Pos::new(-1, 3)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_win_freezes_game() {
        let mut engine = GameEngine::new(15);
        for i in 0..4 {
            engine.submit_move(Pos::new(0, i)).unwrap();
            engine.submit_move(Pos::new(10, 2 * i)).unwrap();
        }
        assert_eq!(engine.submit_move(Pos::new(0, 4)), Ok(Outcome::Won(Player::Black)));
        assert!(engine.is_over());
        // Winner stays the current player
        assert_eq!(engine.current_player(), Player::Black);

        let before = engine.board().clone();
        assert_eq!(
            engine.submit_move(Pos::new(5, 5)),
            Err(MoveError::GameAlreadyOver)
        );
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_white_can_win() {
        let mut engine = GameEngine::new(15);
        let black = [(14, 0), (14, 2), (14, 4), (14, 6), (12, 12)];
        for (i, &(r, c)) in black.iter().enumerate() {
            engine.submit_move(Pos::new(r, c)).unwrap();
            let outcome = engine.submit_move(Pos::new(i as i32, 9)).unwrap();
            if i < 4 {
                assert_eq!(outcome, Outcome::Open);
            } else {
                assert_eq!(outcome, Outcome::Won(Player::White));
            }
        }
    }

    #[test]
    fn test_make_move_status() {
        let mut engine = near_win_engine();
        assert_eq!(engine.make_move(Pos::new(0, 0)), Status::Invalid);
        assert_eq!(engine.make_move(Pos::new(20, 0)), Status::Invalid);
        assert_eq!(engine.make_move(Pos::new(0, 4)), Status::WinBlack);
        assert_eq!(engine.make_move(Pos::new(9, 9)), Status::Invalid);
    }

    #[test]
    fn test_status_from_outcome() {
        assert_eq!(Status::from(Outcome::Open), Status::Open);
        assert_eq!(Status::from(Outcome::Won(Player::Black)), Status::WinBlack);
        assert_eq!(Status::from(Outcome::Won(Player::White)), Status::WinWhite);
    }

    proptest! {
        #[test]
        fn prop_validity_matches_bounds_and_emptiness(row in -3i32..18, col in -3i32..18) {
            let engine = mixed_board_engine();
            let pos = Pos::new(row, col);
            let in_bounds = (0..15).contains(&row) && (0..15).contains(&col);
            let expected = in_bounds && engine.board().get(pos) == Some(Stone::Empty);
            prop_assert_eq!(engine.is_valid_move(pos), expected);
        }

        #[test]
        fn prop_place_stone_changes_at_most_one_cell(row in -3i32..18, col in -3i32..18) {
            let mut engine = mixed_board_engine();
            let pos = Pos::new(row, col);
            let before = engine.board().clone();
            let was_valid = engine.is_valid_move(pos);

            let placed = engine.place_stone(pos);
            prop_assert_eq!(placed, was_valid);
            if placed {
                prop_assert_eq!(engine.board().stone_count(), before.stone_count() + 1);
                prop_assert_eq!(engine.board().get(pos), Some(Stone::Black));
            } else {
                prop_assert_eq!(engine.board(), &before);
            }
        }
    }
}
