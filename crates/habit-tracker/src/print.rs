//! Non-interactive output: the week as a table, or the list of stored weeks

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use libhabit_core::{Color as HabitColor, GridView, WeekKey};

fn table_color(color: HabitColor) -> Color {
    match color {
        HabitColor::Blue => Color::Blue,
        HabitColor::Red => Color::Red,
        HabitColor::Green => Color::Green,
        HabitColor::Yellow => Color::Yellow,
        HabitColor::White => Color::White,
        HabitColor::Orange => Color::Rgb { r: 255, g: 165, b: 0 },
        HabitColor::Purple => Color::Rgb { r: 160, g: 32, b: 240 },
        HabitColor::LightBlue => Color::Cyan,
        HabitColor::LightGreen => Color::Green,
    }
}

/// Build the week table shown by `--print`
pub fn week_table(view: &GridView) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(view.header_labels.iter().map(|label| Cell::new(label)));

    for row in &view.rows {
        let color = table_color(row.color);
        let mut cells = vec![Cell::new(&row.label).fg(color)];
        cells.extend(row.cells.iter().map(|done| {
            let cell = if *done {
                Cell::new("✓").fg(color)
            } else {
                Cell::new("✗").fg(Color::Grey)
            };
            cell.set_alignment(CellAlignment::Center)
        }));
        table.add_row(cells);
    }
    table
}

pub fn print_week(view: &GridView) {
    println!("Week {}", view.week);
    println!("{}", week_table(view));
}

pub fn print_weeks(weeks: &[WeekKey]) {
    if weeks.is_empty() {
        println!("No weeks recorded yet");
        return;
    }
    for week in weeks {
        println!("{}", week);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libhabit_core::{default_habits, Cursor, Day, WeeklyGrid};

    #[test]
    fn test_week_table_contents() {
        let mut grid = WeeklyGrid::seeded(&default_habits()[..2]).unwrap();
        grid.toggle(0, Day::Sunday).unwrap();
        let view = GridView::build(WeekKey::new(2024, 10).unwrap(), &grid, &Cursor::reset(grid.geometry()));

        let rendered = week_table(&view).to_string();
        assert!(rendered.contains("Habit"));
        assert!(rendered.contains("Thursday"));
        assert!(rendered.contains("exercise"));
        assert_eq!(rendered.matches('✓').count(), 1);
        assert_eq!(rendered.matches('✗').count(), 13);
    }
}
