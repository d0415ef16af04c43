//! Square board of configurable size

use super::{Pos, Stone};

/// Game board, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let n = self.size as i64;
        (0..n).contains(&(pos.row as i64)) && (0..n).contains(&(pos.col as i64))
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// Get stone at position (`None` off the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Put a stone on an empty cell.
    ///
    /// Returns false and leaves the board untouched when the position is
    /// off the board, already occupied, or `stone` is `Empty`.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty {
            return false;
        }
        match self.index(pos) {
            Some(idx) if self.cells[idx] == Stone::Empty => {
                self.cells[idx] = stone;
                true
            }
            _ => false,
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Stone]> {
        // chunks panics on zero, and a zero-sized board has no rows anyway
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Count stones of one kind
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len() - self.count(Stone::Empty)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
