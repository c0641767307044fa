//! Application state and event handling

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use libhabit_core::{Command, HabitError, Outcome, Tracker, WeekStore};
use ratatui::backend::Backend;
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing::{info, warn};

use crate::dialogs::{AddForm, ConfirmRemove, DialogResult, RemovePicker};
use crate::error::{Result, TrackerError};
use crate::keymap::{self, Action};
use crate::ui::{self, Mode, UiState};

/// Main application: the tracker session plus what is on screen
pub struct App<S: WeekStore> {
    tracker: Tracker<S>,
    ui_state: UiState,
    should_quit: bool,
}

impl<S: WeekStore> App<S> {
    pub fn new(tracker: Tracker<S>) -> Self {
        Self {
            tracker,
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    /// Run the TUI until quit
    pub fn run(&mut self) -> Result<()> {
        self.run_terminal().map_err(TrackerError::Terminal)
    }

    fn run_terminal(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Cleanup terminal, even when the loop failed
        disable_raw_mode()?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(week = %self.tracker.week(), "Session started");
        while !self.should_quit {
            let view = self.tracker.view();
            terminal.draw(|frame| {
                ui::draw(frame, &view, self.tracker.grid(), &self.ui_state);
            })?;

            // Blocks until the next input; resize just redraws
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        info!("Session ended");
        Ok(())
    }

    /// Route a key to the open dialog, or to the grid bindings
    pub fn handle_key(&mut self, key: KeyEvent) {
        match std::mem::take(&mut self.ui_state.mode) {
            Mode::Grid => {
                if let Some(action) = keymap::grid_action(key) {
                    self.ui_state.status = None;
                    self.apply(action);
                }
            }
            Mode::Help => {
                // Any key press closes help
                if key.kind == KeyEventKind::Release {
                    self.ui_state.mode = Mode::Help;
                }
            }
            Mode::Add(mut form) => match form.handle_key(key) {
                DialogResult::Pending => self.ui_state.mode = Mode::Add(form),
                DialogResult::Cancelled => {}
                DialogResult::Done((name, color)) => {
                    self.dispatch(Command::AddHabit { name, color });
                }
            },
            Mode::Remove(mut picker) => match picker.handle_key(key) {
                DialogResult::Pending => self.ui_state.mode = Mode::Remove(picker),
                DialogResult::Cancelled => {}
                DialogResult::Done(name) => {
                    self.ui_state.mode = Mode::Confirm(ConfirmRemove::new(name));
                }
            },
            Mode::Confirm(confirm) => match confirm.handle_key(key) {
                DialogResult::Pending => self.ui_state.mode = Mode::Confirm(confirm),
                DialogResult::Cancelled => {}
                DialogResult::Done(name) => {
                    self.dispatch(Command::RemoveHabit { name });
                }
            },
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Dispatch(command) => self.dispatch(command),
            Action::OpenAddDialog => self.ui_state.mode = Mode::Add(AddForm::new()),
            Action::OpenRemoveDialog => {
                let names = self
                    .tracker
                    .grid()
                    .habits()
                    .names()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if let Some(picker) = RemovePicker::new(names) {
                    self.ui_state.mode = Mode::Remove(picker);
                }
            }
        }
    }

    fn dispatch(&mut self, command: Command) {
        let label = match &command {
            Command::AddHabit { name, .. } => Some(format!("Added '{}'", name.trim())),
            Command::RemoveHabit { name } => Some(format!("Removed '{}'", name)),
            _ => None,
        };

        match self.tracker.handle(command) {
            Ok(Outcome::Quit) => self.should_quit = true,
            Ok(Outcome::ShowHelp) => self.ui_state.mode = Mode::Help,
            Ok(Outcome::WeekRolled(week)) => {
                self.ui_state.set_info(format!("New week {} started; press again to apply", week));
            }
            Ok(Outcome::Rebuilt) => {
                if let Some(label) = label {
                    self.ui_state.set_info(label);
                }
            }
            Ok(Outcome::Continue) => {}
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: HabitError) {
        if !err.is_recoverable() {
            warn!(error = %err, "Unexpected error from command");
        }
        let message = match &err {
            HabitError::Io(_) => format!("Save failed: {} (changes kept for this session)", err),
            _ => err.to_string(),
        };
        self.ui_state.set_error(message);
    }
}
