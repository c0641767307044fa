//! TUI layout

use libhabit_core::{GridView, WeeklyGrid};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::widgets;
use crate::dialogs::{AddForm, ConfirmRemove, RemovePicker};

/// Which screen has the keyboard
#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    Grid,
    Help,
    Add(AddForm),
    Remove(RemovePicker),
    Confirm(ConfirmRemove),
}

/// One-line message under the grid
#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    pub mode: Mode,
    pub status: Option<Status>,
}

impl UiState {
    pub fn set_info(&mut self, text: String) {
        self.status = Some(Status { text, is_error: false });
    }

    pub fn set_error(&mut self, text: String) {
        self.status = Some(Status { text, is_error: true });
    }
}

/// Draw the main UI
pub fn draw(frame: &mut Frame, view: &GridView, grid: &WeeklyGrid, state: &UiState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Week bar
            Constraint::Length(1), // Padding
            Constraint::Min(3),    // Grid
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    widgets::summary::render(frame, chunks[1], view, grid);

    // Center the grid horizontally, 1:3:1
    let grid_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(3, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(chunks[3]);
    widgets::grid::render(frame, grid_chunks[1], view);

    widgets::status::render(frame, chunks[4], state.status.as_ref());
    render_help_bar(frame, chunks[5]);

    match &state.mode {
        Mode::Grid => {}
        Mode::Help => widgets::dialogs::render_help(frame, area),
        Mode::Add(form) => widgets::dialogs::render_add(frame, area, form),
        Mode::Remove(picker) => widgets::dialogs::render_remove(frame, area, picker),
        Mode::Confirm(confirm) => widgets::dialogs::render_confirm(frame, area, confirm),
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("HABIT TRACKER")
        .style(Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_text = " [hjkl]Move  [space]Toggle  [a]Add  [d]Remove  [?]Help  [q]Quit ";
    let help_bar = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help_bar, area);
}

/// Rectangle of `width` × `height` centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
