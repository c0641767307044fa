//! Cursor over the rendered grid
//!
//! Vertical moves skip spacer rows; the two axes move independently, so the
//! column survives up/down and the row survives left/right.

use crate::grid::{Geometry, LAST_COL};
use crate::types::Day;

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Position on the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
    max_row: usize,
}

impl Cursor {
    /// Initial position for a (re)built grid: first habit's name cell, or the
    /// header when there are no habits
    pub fn reset(geometry: Geometry) -> Self {
        let row = if geometry.habit_count() > 0 { 1 } else { 0 };
        Self {
            row,
            col: 0,
            max_row: geometry.max_row(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Apply a move. Returns `false` for a boundary no-op.
    pub fn step(&mut self, direction: Direction) -> bool {
        let before = self.position();
        match direction {
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                }
            }
            Direction::Right => {
                if self.col < LAST_COL {
                    self.col += 1;
                }
            }
            Direction::Up => {
                if self.row > 1 {
                    self.row -= if self.row % 2 == 0 { 1 } else { 2 };
                }
            }
            Direction::Down => {
                if self.row < self.max_row {
                    self.row += if self.row % 2 == 0 { 1 } else { 2 };
                }
            }
        }
        self.position() != before
    }

    /// Habit index and day under the cursor, when it sits on a content row and
    /// a day column
    pub fn target(&self) -> Option<(usize, Day)> {
        if self.row % 2 == 0 {
            return None;
        }
        let day = Day::from_column(self.col)?;
        Some(((self.row - 1) / 2, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(n: usize, row: usize, col: usize) -> Cursor {
        let mut c = Cursor::reset(Geometry::new(n));
        c.row = row;
        c.col = col;
        c
    }

    #[test]
    fn test_reset_positions() {
        assert_eq!(Cursor::reset(Geometry::new(3)).position(), (1, 0));
        assert_eq!(Cursor::reset(Geometry::new(0)).position(), (0, 0));
    }

    #[test]
    fn test_horizontal_bounds() {
        let mut c = cursor_at(2, 1, 0);
        assert!(!c.step(Direction::Left));
        for expected in 1..=7 {
            assert!(c.step(Direction::Right));
            assert_eq!(c.col(), expected);
        }
        assert!(!c.step(Direction::Right));
        assert_eq!(c.position(), (1, 7));
    }

    #[test]
    fn test_vertical_never_lands_on_spacer() {
        for n in 1..10 {
            let g = Geometry::new(n);
            for i in 0..n {
                for dir in [Direction::Up, Direction::Down] {
                    let mut c = cursor_at(n, g.row_for_habit(i), 3);
                    c.step(dir);
                    assert!(!g.is_spacer(c.row()), "n={} habit={} {:?}", n, i, dir);
                    assert!(c.row() % 2 == 1);
                    assert_eq!(c.col(), 3);
                }
            }
        }
    }

    #[test]
    fn test_walk_down_and_up() {
        let n = 4;
        let mut c = Cursor::reset(Geometry::new(n));
        let mut rows = vec![c.row()];
        while c.step(Direction::Down) {
            rows.push(c.row());
        }
        assert_eq!(rows, vec![1, 3, 5, 7]);

        let mut rows = vec![c.row()];
        while c.step(Direction::Up) {
            rows.push(c.row());
        }
        assert_eq!(rows, vec![7, 5, 3, 1]);
    }

    #[test]
    fn test_header_and_spacer_recovery() {
        let mut c = cursor_at(3, 0, 2);
        assert!(!c.step(Direction::Up));
        assert!(c.step(Direction::Down));
        assert_eq!(c.position(), (1, 2));

        let mut c = cursor_at(3, 2, 2);
        c.step(Direction::Up);
        assert_eq!(c.row(), 1);
        let mut c = cursor_at(3, 2, 2);
        c.step(Direction::Down);
        assert_eq!(c.row(), 3);
    }

    #[test]
    fn test_empty_grid_stays_on_header() {
        let mut c = Cursor::reset(Geometry::new(0));
        assert!(!c.step(Direction::Down));
        assert!(!c.step(Direction::Up));
        assert_eq!(c.target(), None);
    }

    #[test]
    fn test_target() {
        assert_eq!(cursor_at(3, 1, 0).target(), None);
        assert_eq!(cursor_at(3, 1, 1).target(), Some((0, Day::Monday)));
        assert_eq!(cursor_at(3, 5, 7).target(), Some((2, Day::Sunday)));
        assert_eq!(cursor_at(3, 2, 3).target(), None);
        assert_eq!(cursor_at(3, 0, 3).target(), None);
    }
}
