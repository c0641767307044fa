//! Weekly grid: habits × seven fixed day columns
//!
//! The rendered table has a header row at 0, habit `i` at row `2i + 1`, and a
//! non-selectable spacer row between consecutive habits. Column 0 holds the
//! habit name, columns 1..=7 map to `Day::ALL`.

use serde::{Deserialize, Serialize};

use crate::error::HabitError;
use crate::types::{Color, Day, Habit, HabitSet};

/// Number of day columns
pub const DAY_COUNT: usize = 7;

/// Index of the last rendered column
pub const LAST_COL: usize = DAY_COUNT;

/// One week's habits and completion marks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyGrid {
    habits: HabitSet,
}

impl WeeklyGrid {
    pub fn new(habits: HabitSet) -> Self {
        Self { habits }
    }

    /// Grid for a week with no record: the given habits, no marks
    pub fn seeded(defaults: &[Habit]) -> Result<Self, HabitError> {
        let fresh = defaults
            .iter()
            .map(|h| Habit::new(h.name.clone(), h.color))
            .collect();
        Ok(Self::new(HabitSet::from_habits(fresh)?))
    }

    pub fn habits(&self) -> &HabitSet {
        &self.habits
    }

    pub fn habit_count(&self) -> usize {
        self.habits.len()
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.habits.len())
    }

    /// Flip the mark at (habit, day) and return the new value
    pub fn toggle(&mut self, habit_index: usize, day: Day) -> Result<bool, HabitError> {
        let len = self.habits.len();
        let habit = self
            .habits
            .get_mut(habit_index)
            .ok_or(HabitError::IndexOutOfRange { index: habit_index, len })?;
        Ok(habit.toggle(day))
    }

    /// Stored mark, `false` when absent or when the index is past the end
    pub fn is_complete(&self, habit_index: usize, day: Day) -> bool {
        self.habits
            .get(habit_index)
            .map(|h| h.is_complete(day))
            .unwrap_or(false)
    }

    pub fn add_habit(&mut self, name: &str, color: Color) -> Result<&Habit, HabitError> {
        self.habits.add(name, color)
    }

    pub fn remove_habit(&mut self, name: &str) -> Option<Habit> {
        self.habits.remove(name)
    }

    pub fn refresh_default_colors(&mut self) -> usize {
        self.habits.refresh_default_colors()
    }

    /// Completed cells over all cells, for the status line
    pub fn completion_totals(&self) -> (usize, usize) {
        let done = self.habits.iter().map(Habit::completed_count).sum();
        (done, self.habits.len() * DAY_COUNT)
    }
}

/// Row layout of the rendered table, a pure function of the habit count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    habit_count: usize,
}

impl Geometry {
    pub fn new(habit_count: usize) -> Self {
        Self { habit_count }
    }

    pub fn habit_count(&self) -> usize {
        self.habit_count
    }

    /// Rendered row of habit `i`
    pub fn row_for_habit(&self, index: usize) -> usize {
        2 * index + 1
    }

    /// Habit shown on `row`, `None` for the header and spacer rows
    pub fn habit_for_row(&self, row: usize) -> Option<usize> {
        if row % 2 == 1 && (row - 1) / 2 < self.habit_count {
            Some((row - 1) / 2)
        } else {
            None
        }
    }

    /// Rows below the header: habits plus the spacers between them
    pub fn body_rows(&self) -> usize {
        (2 * self.habit_count).saturating_sub(1)
    }

    /// Last row index, which is the last content row when any habit exists
    pub fn max_row(&self) -> usize {
        self.body_rows()
    }

    pub fn is_spacer(&self, row: usize) -> bool {
        row > 0 && row % 2 == 0 && row < self.body_rows()
    }

    pub fn spacer_rows(&self) -> Vec<usize> {
        (0..self.habit_count.saturating_sub(1))
            .map(|i| 2 * i + 2)
            .collect()
    }
}
