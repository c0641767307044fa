//! Command dispatch over the tracker session state
//!
//! Every structural change is saved before `handle` returns. A failed save
//! keeps the in-memory change and reports the error; the session goes on.

use tracing::{debug, info, warn};

use crate::config::WeekPolicy;
use crate::cursor::{Cursor, Direction};
use crate::error::HabitError;
use crate::grid::WeeklyGrid;
use crate::store::WeekStore;
use crate::types::{Clock, Color, WeekKey};
use crate::view::GridView;

/// Abstract input, already mapped from keys or dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Toggle,
    AddHabit { name: String, color: Color },
    RemoveHabit { name: String },
    ShowHelp,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::MoveUp => "move-up",
            Command::MoveDown => "move-down",
            Command::Toggle => "toggle",
            Command::AddHabit { .. } => "add-habit",
            Command::RemoveHabit { .. } => "remove-habit",
            Command::ShowHelp => "show-help",
            Command::Quit => "quit",
        }
    }
}

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw; geometry unchanged
    Continue,
    /// Habit count changed and the cursor was reset
    Rebuilt,
    /// The clock moved into another week. The new week is loaded and the
    /// command was not applied.
    WeekRolled(WeekKey),
    ShowHelp,
    Quit,
}

/// Session state: one week's grid, its cursor, and where it is saved
pub struct Tracker<S: WeekStore> {
    store: S,
    clock: Box<dyn Clock>,
    policy: WeekPolicy,
    week: WeekKey,
    grid: WeeklyGrid,
    cursor: Cursor,
}

impl<S: WeekStore> Tracker<S> {
    /// Open the week containing the clock's today
    pub fn open(store: S, clock: Box<dyn Clock>, policy: WeekPolicy) -> Result<Self, HabitError> {
        let week = WeekKey::current(clock.as_ref());
        Self::open_week(store, clock, policy, week)
    }

    /// Open a specific week
    pub fn open_week(
        mut store: S,
        clock: Box<dyn Clock>,
        policy: WeekPolicy,
        week: WeekKey,
    ) -> Result<Self, HabitError> {
        let grid = store.load(week)?;
        let cursor = Cursor::reset(grid.geometry());
        info!(week = %week, habits = grid.habit_count(), policy = policy.as_str(), "Opened week");
        Ok(Self {
            store,
            clock,
            policy,
            week,
            grid,
            cursor,
        })
    }

    pub fn handle(&mut self, command: Command) -> Result<Outcome, HabitError> {
        debug!(command = command.name(), "Handling command");
        match command {
            Command::MoveLeft => Ok(self.step(Direction::Left)),
            Command::MoveRight => Ok(self.step(Direction::Right)),
            Command::MoveUp => Ok(self.step(Direction::Up)),
            Command::MoveDown => Ok(self.step(Direction::Down)),
            Command::Toggle => self.toggle(),
            Command::AddHabit { name, color } => self.add_habit(&name, color),
            Command::RemoveHabit { name } => self.remove_habit(&name),
            Command::ShowHelp => Ok(Outcome::ShowHelp),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn step(&mut self, direction: Direction) -> Outcome {
        self.cursor.step(direction);
        Outcome::Continue
    }

    fn toggle(&mut self) -> Result<Outcome, HabitError> {
        // Off-target toggles are ignored
        let Some((habit, day)) = self.cursor.target() else {
            return Ok(Outcome::Continue);
        };
        if let Some(week) = self.roll_week()? {
            return Ok(Outcome::WeekRolled(week));
        }
        let done = self.grid.toggle(habit, day)?;
        debug!(week = %self.week, habit, day = %day, done, "Toggled");
        self.persist()?;
        Ok(Outcome::Continue)
    }

    fn add_habit(&mut self, name: &str, color: Color) -> Result<Outcome, HabitError> {
        if let Some(week) = self.roll_week()? {
            return Ok(Outcome::WeekRolled(week));
        }
        let added = self.grid.add_habit(name, color)?;
        info!(week = %self.week, name = %added.name, color = %color, "Added habit");
        self.rebuild();
        self.persist()?;
        Ok(Outcome::Rebuilt)
    }

    fn remove_habit(&mut self, name: &str) -> Result<Outcome, HabitError> {
        if let Some(week) = self.roll_week()? {
            return Ok(Outcome::WeekRolled(week));
        }
        if self.grid.remove_habit(name).is_none() {
            debug!(name, "Remove of unknown habit ignored");
            return Ok(Outcome::Continue);
        }
        info!(week = %self.week, name, "Removed habit");
        self.rebuild();
        self.persist()?;
        Ok(Outcome::Rebuilt)
    }

    /// Under `WeekPolicy::Follow`, switch to the clock's week when it moved on
    fn roll_week(&mut self) -> Result<Option<WeekKey>, HabitError> {
        if self.policy != WeekPolicy::Follow {
            return Ok(None);
        }
        let now = WeekKey::current(self.clock.as_ref());
        if now == self.week {
            return Ok(None);
        }
        let grid = self.store.load(now)?;
        info!(from = %self.week, to = %now, "Week rolled over");
        self.week = now;
        self.grid = grid;
        self.rebuild();
        Ok(Some(now))
    }

    fn rebuild(&mut self) {
        self.cursor = Cursor::reset(self.grid.geometry());
    }

    fn persist(&mut self) -> Result<(), HabitError> {
        self.store.save(&self.grid, self.week).map_err(|e| {
            warn!(week = %self.week, error = %e, "Save failed; keeping in-memory state");
            e
        })
    }

    pub fn view(&self) -> GridView {
        GridView::build(self.week, &self.grid, &self.cursor)
    }

    pub fn grid(&self) -> &WeeklyGrid {
        &self.grid
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn week(&self) -> WeekKey {
        self.week
    }

    pub fn policy(&self) -> WeekPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
