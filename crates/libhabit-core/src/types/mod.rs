pub mod color;
pub mod day;
pub mod habit;
pub mod week;

pub use color::Color;
pub use day::Day;
pub use habit::{default_habits, Habit, HabitSet};
pub use week::{Clock, FixedClock, SystemClock, WeekKey};
