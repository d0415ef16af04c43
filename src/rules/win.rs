//! Win condition checking
//!
//! Five or more stones in a row along any of the four axes wins.
//! Overlines are not excluded.

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row
pub const WIN_LENGTH: usize = 5;

/// Furthest step scanned on each side of the anchor
const MAX_STEP: i32 = WIN_LENGTH as i32 - 1;

/// Count contiguous `player` stones from `pos` along `(dr, dc)`, not
/// counting `pos` itself and stopping after `MAX_STEP` cells.
fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32), player: Player) -> usize {
    (1..=MAX_STEP)
        .take_while(|&step| board.get(pos.offset(dr, dc, step)) == Some(player.stone()))
        .count()
}

/// Check for 5+ in a row through `pos` for `player`.
///
/// Only checks the 4 axes through the given position, which is enough
/// when `pos` holds the stone just played: a new line can only be
/// completed by the latest stone. The stone at `pos` itself is assumed
/// to be `player`'s and is not read.
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    if !board.contains(pos) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count =
            1 + run_length(board, pos, (dr, dc), player) + run_length(board, pos, (-dr, -dc), player);
        count >= WIN_LENGTH
    })
}

/// Find a complete line of `player` stones anywhere on the board.
///
/// Returns the positions of the full contiguous run (at least five),
/// ordered from one end to the other.
pub fn find_five_line(board: &Board, player: Player) -> Option<Vec<Pos>> {
    let n = board.size() as i32;
    let stone = player.stone();

    for row in 0..n {
        for col in 0..n {
            let start = Pos::new(row, col);
            if board.get(start) != Some(stone) {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                // Only start from the first stone of a run
                if board.get(start.offset(dr, dc, -1)) == Some(stone) {
                    continue;
                }
                let line: Vec<Pos> = (0..)
                    .map(|step| start.offset(dr, dc, step))
                    .take_while(|&p| board.get(p) == Some(stone))
                    .collect();
                if line.len() >= WIN_LENGTH {
                    return Some(line);
                }
            }
        }
    }
    None
}
