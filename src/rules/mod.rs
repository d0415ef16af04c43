//! Game rules for Gomoku
//!
//! Freestyle rules: any five or more in a row wins, there are no
//! captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line, has_five_at_pos, WIN_LENGTH};
