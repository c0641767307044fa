use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::HabitError;

/// ISO-8601 (year, week) pair naming one independent week record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn new(year: i32, week: u32) -> Result<Self, HabitError> {
        if !(1..=53).contains(&week) {
            return Err(HabitError::InvalidArgs(format!(
                "week must be between 1 and 53, got {}",
                week
            )));
        }
        Ok(Self { year, week })
    }

    /// Week containing `date`. The ISO year can differ from the calendar year
    /// around New Year.
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    pub fn current(clock: &dyn Clock) -> Self {
        Self::from_date(clock.today())
    }

    /// Monday of this week, if the key names a real ISO week
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, chrono::Weekday::Mon)
    }

    /// Record file name, e.g. `habits_2024_10.json`
    pub fn file_name(&self) -> String {
        format!("habits_{}_{}.json", self.year, self.week)
    }

    /// Inverse of `file_name`; `None` for anything else
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_prefix("habits_")?.strip_suffix(".json")?;
        let (year, week) = stem.split_once('_')?;
        WeekKey::new(year.parse().ok()?, week.parse().ok()?).ok()
    }
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl std::str::FromStr for WeekKey {
    type Err = HabitError;

    /// Parse `2024-W10` (or `2024-w10`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HabitError::InvalidArgs(format!("invalid week '{}'", s));
        let (year, week) = s.split_once(['W', 'w']).ok_or_else(invalid)?;
        let year = year.strip_suffix('-').unwrap_or(year);
        let key = WeekKey::new(
            year.parse().map_err(|_| invalid())?,
            week.parse().map_err(|_| invalid())?,
        )?;
        // Week 53 only exists in some years
        if key.monday().is_none() {
            return Err(invalid());
        }
        Ok(key)
    }
}

/// Source of "today" for week key derivation
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a date, settable between calls
#[derive(Debug)]
pub struct FixedClock {
    date: std::cell::Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: std::cell::Cell::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
