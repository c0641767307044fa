//! Terminal rendering of the weekly grid

pub mod layout;
pub mod widgets;

pub use layout::{draw, Mode, Status, UiState};

use libhabit_core::Color as HabitColor;
use ratatui::style::Color;

/// Terminal color for a habit color tag
pub fn habit_color(color: HabitColor) -> Color {
    match color {
        HabitColor::Blue => Color::Blue,
        HabitColor::Red => Color::Red,
        HabitColor::Green => Color::Green,
        HabitColor::Yellow => Color::Yellow,
        HabitColor::White => Color::White,
        HabitColor::Orange => Color::Rgb(255, 165, 0),
        HabitColor::Purple => Color::Rgb(160, 32, 240),
        HabitColor::LightBlue => Color::LightBlue,
        HabitColor::LightGreen => Color::LightGreen,
    }
}
