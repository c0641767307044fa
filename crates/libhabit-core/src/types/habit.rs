use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Color, Day};
use crate::error::HabitError;

/// A single tracked habit and its completion marks for one week
///
/// Identity is the name. There is no rename; a new name means remove + add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub color: Color,
    /// Completion per day. A missing day means not completed.
    #[serde(default)]
    pub days: BTreeMap<Day, bool>,
}

impl Habit {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            days: BTreeMap::new(),
        }
    }

    pub fn is_complete(&self, day: Day) -> bool {
        self.days.get(&day).copied().unwrap_or(false)
    }

    /// Flip the mark for `day` and return the new value
    pub fn toggle(&mut self, day: Day) -> bool {
        let next = !self.is_complete(day);
        self.days.insert(day, next);
        next
    }

    /// Marks in column order, absent days as `false`
    pub fn cells(&self) -> [bool; 7] {
        Day::ALL.map(|day| self.is_complete(day))
    }

    pub fn completed_count(&self) -> usize {
        Day::ALL.iter().filter(|d| self.is_complete(**d)).count()
    }
}

/// Ordered habits, insertion order, unique names
///
/// Serialized as a bare JSON array, the shape of a week record on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitSet {
    habits: Vec<Habit>,
}

impl HabitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing habits, rejecting repeated names
    pub fn from_habits(habits: Vec<Habit>) -> Result<Self, HabitError> {
        let mut set = Self::new();
        for habit in habits {
            if set.contains(&habit.name) {
                return Err(HabitError::DuplicateName(habit.name));
            }
            set.habits.push(habit);
        }
        Ok(set)
    }

    /// Append a habit with no completion marks
    pub fn add(&mut self, name: &str, color: Color) -> Result<&Habit, HabitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::InvalidArgs("habit name must not be empty".to_string()));
        }
        if self.contains(name) {
            return Err(HabitError::DuplicateName(name.to_string()));
        }
        self.habits.push(Habit::new(name, color));
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Remove the habit with this name. Returns `None` when absent.
    pub fn remove(&mut self, name: &str) -> Option<Habit> {
        let index = self.position(name)?;
        Some(self.habits.remove(index))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.habits.iter().position(|h| h.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&Habit> {
        self.habits.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Habit> {
        self.habits.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.habits.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.habits.iter().map(|h| h.name.as_str()).collect()
    }

    /// Give habits that share a name with a built-in default that default's color
    ///
    /// Returns how many colors changed.
    pub fn refresh_default_colors(&mut self) -> usize {
        let defaults = default_habits();
        let mut changed = 0;
        for habit in &mut self.habits {
            if let Some(d) = defaults.iter().find(|d| d.name == habit.name) {
                if habit.color != d.color {
                    habit.color = d.color;
                    changed += 1;
                }
            }
        }
        changed
    }
}

impl<'a> IntoIterator for &'a HabitSet {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.habits.iter()
    }
}

/// Built-in seed list for a week that has no record yet
pub fn default_habits() -> Vec<Habit> {
    [
        ("water", Color::Blue),
        ("exercise", Color::Red),
        ("certification", Color::Yellow),
        ("breath", Color::White),
        ("newsboat", Color::Orange),
        ("recap", Color::LightBlue),
        ("personal", Color::Green),
        ("read", Color::Purple),
    ]
    .into_iter()
    .map(|(name, color)| Habit::new(name, color))
    .collect()
}
