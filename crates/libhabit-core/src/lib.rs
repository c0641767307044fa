//! Core of the weekly habit tracker: the habit/day grid, cursor navigation
//! over its rendered form, command dispatch, and one JSON record per ISO week.

pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod grid;
pub mod store;
pub mod types;
pub mod view;

pub use config::{load_config, HabitTemplate, TrackerConfig, WeekPolicy};
pub use cursor::{Cursor, Direction};
pub use dispatch::{Command, Outcome, Tracker};
pub use error::HabitError;
pub use grid::{Geometry, WeeklyGrid};
pub use store::{FileWeekStore, MemoryWeekStore, WeekStore};
pub use types::{default_habits, Clock, Color, Day, FixedClock, Habit, HabitSet, SystemClock, WeekKey};
pub use view::{GridView, RowView};
