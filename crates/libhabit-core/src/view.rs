use serde::Serialize;

use crate::cursor::Cursor;
use crate::grid::WeeklyGrid;
use crate::types::{Color, Day, WeekKey};

/// Label of the name column header
pub const NAME_HEADER: &str = "Habit";

/// One habit row as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Rendered row index
    pub row: usize,
    pub label: String,
    pub color: Color,
    pub cells: [bool; 7],
}

/// Everything a renderer needs to draw one frame of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub week: WeekKey,
    pub header_labels: Vec<String>,
    pub rows: Vec<RowView>,
    pub spacer_rows: Vec<usize>,
    pub cursor: (usize, usize),
}

impl GridView {
    pub fn build(week: WeekKey, grid: &WeeklyGrid, cursor: &Cursor) -> Self {
        let geometry = grid.geometry();
        let header_labels = std::iter::once(NAME_HEADER.to_string())
            .chain(Day::ALL.iter().map(|d| d.name().to_string()))
            .collect();
        let rows = grid
            .habits()
            .iter()
            .enumerate()
            .map(|(i, habit)| RowView {
                row: geometry.row_for_habit(i),
                label: habit.name.clone(),
                color: habit.color,
                cells: habit.cells(),
            })
            .collect();

        Self {
            week,
            header_labels,
            rows,
            spacer_rows: geometry.spacer_rows(),
            cursor: cursor.position(),
        }
    }

    /// Rendered rows below the header
    pub fn body_rows(&self) -> usize {
        self.rows.len() + self.spacer_rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_habits;

    #[test]
    fn test_build_view() {
        let mut grid = WeeklyGrid::seeded(&default_habits()[..3]).unwrap();
        grid.toggle(2, Day::Thursday).unwrap();
        let cursor = Cursor::reset(grid.geometry());
        let view = GridView::build(WeekKey::new(2024, 10).unwrap(), &grid, &cursor);

        assert_eq!(view.header_labels.len(), 8);
        assert_eq!(view.header_labels[0], "Habit");
        assert_eq!(view.header_labels[7], "Sunday");
        assert_eq!(view.rows.iter().map(|r| r.row).collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(view.spacer_rows, vec![2, 4]);
        assert!(view.rows[2].cells[3]);
        assert_eq!(view.cursor, (1, 0));
        assert_eq!(view.body_rows(), 5);
    }

    #[test]
    fn test_empty_view() {
        let grid = WeeklyGrid::default();
        let cursor = Cursor::reset(grid.geometry());
        let view = GridView::build(WeekKey::new(2024, 1).unwrap(), &grid, &cursor);
        assert!(view.rows.is_empty());
        assert!(view.spacer_rows.is_empty());
        assert_eq!(view.cursor, (0, 0));
    }
}
