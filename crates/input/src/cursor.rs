//! Card cursor for keyboard play.

use crate::types::CardIndex;

/// Highlighted card, clamped to the grid.
///
/// Movement stops at the edges instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    rows: u16,
    cols: u16,
    row: u16,
    col: u16,
}

impl GridCursor {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            row: 0,
            col: 0,
        }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    /// Row-major index of the highlighted card
    pub fn index(&self) -> CardIndex {
        self.row as usize * self.cols as usize + self.col as usize
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.rows {
            self.row += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.col + 1 < self.cols {
            self.col += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_top_left() {
        let cursor = GridCursor::new(4, 4);
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn moves_are_clamped_to_grid() {
        let mut cursor = GridCursor::new(2, 3);
        cursor.move_up();
        cursor.move_left();
        assert_eq!(cursor.index(), 0);

        for _ in 0..5 {
            cursor.move_right();
            cursor.move_down();
        }
        assert_eq!((cursor.row(), cursor.col()), (1, 2));
        assert_eq!(cursor.index(), 5);
    }
}
