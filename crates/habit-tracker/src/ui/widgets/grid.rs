//! Habit × day grid widget

use libhabit_core::GridView;
use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

use crate::ui::habit_color;

const DONE: &str = "✓";
const NOT_DONE: &str = "✗";

fn selected_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

fn column_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// Render the grid: header, one row per habit, blank spacer rows between them
pub fn render(frame: &mut Frame, area: Rect, view: &GridView) {
    let (cursor_row, cursor_col) = view.cursor;

    let header = Row::new(view.header_labels.iter().enumerate().map(|(col, label)| {
        let style = if cursor_row == 0 && cursor_col == col {
            selected_style()
        } else {
            Style::default().fg(Color::White)
        };
        Cell::from(Text::from(label.as_str()).alignment(Alignment::Center)).style(style)
    }))
    .height(1);

    let mut rows: Vec<Row> = Vec::with_capacity(view.body_rows());
    for habit in &view.rows {
        if habit.row > 1 {
            rows.push(Row::new(vec![Cell::from(""); view.header_labels.len()]));
        }

        let color = habit_color(habit.color);
        let selected = |col: usize| habit.row == cursor_row && col == cursor_col;

        let mut cells = Vec::with_capacity(habit.cells.len() + 1);
        let name_style = if selected(0) { selected_style() } else { Style::default().fg(color) };
        cells.push(Cell::from(format!("  {}  ", habit.label)).style(name_style));

        for (i, done) in habit.cells.iter().enumerate() {
            let (symbol, mut style) = if *done {
                (DONE, Style::default().fg(color))
            } else {
                (NOT_DONE, Style::default().fg(Color::Gray))
            };
            if selected(i + 1) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            cells.push(Cell::from(Text::from(symbol).alignment(Alignment::Center)).style(style));
        }
        rows.push(Row::new(cells));
    }

    let name_width = view
        .rows
        .iter()
        .map(|r| column_width(&r.label).saturating_add(4))
        .chain(std::iter::once(column_width(&view.header_labels[0])))
        .max()
        .unwrap_or(8);
    let mut widths = vec![Constraint::Length(name_width)];
    widths.extend(std::iter::repeat(Constraint::Fill(1)).take(view.header_labels.len() - 1));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1);

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use libhabit_core::{default_habits, Cursor, Day, WeekKey, WeeklyGrid};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_lines(view: &GridView) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal.draw(|f| render(f, f.area(), view)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_rows_and_spacers() {
        let mut grid = WeeklyGrid::seeded(&default_habits()[..3]).unwrap();
        grid.toggle(1, Day::Monday).unwrap();
        let view = GridView::build(WeekKey::new(2024, 10).unwrap(), &grid, &Cursor::reset(grid.geometry()));

        let lines = render_to_lines(&view);
        assert!(lines[0].contains("Habit") && lines[0].contains("Sunday"));
        assert!(lines[1].contains("water"));
        assert!(lines[2].trim().is_empty());
        assert!(lines[3].contains("exercise") && lines[3].contains(DONE));
        assert!(lines[4].trim().is_empty());
        assert!(lines[5].contains("certification"));
        assert_eq!(lines[5].matches(NOT_DONE).count(), 7);
    }

    #[test]
    fn test_oversized_name_saturates_width() {
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(column_width(&long), u16::MAX);
        assert_eq!(column_width(&long).saturating_add(4), u16::MAX);

        let mut grid = WeeklyGrid::default();
        grid.add_habit(&"y".repeat(70_000), libhabit_core::Color::Red).unwrap();
        let view = GridView::build(WeekKey::new(2024, 10).unwrap(), &grid, &Cursor::reset(grid.geometry()));
        let lines = render_to_lines(&view);
        assert!(lines[1].starts_with("  y"));
    }

    #[test]
    fn test_cursor_cell_is_underlined() {
        let grid = WeeklyGrid::seeded(&default_habits()[..2]).unwrap();
        let mut cursor = Cursor::reset(grid.geometry());
        cursor.step(libhabit_core::Direction::Right);
        let view = GridView::build(WeekKey::new(2024, 10).unwrap(), &grid, &cursor);

        let mut terminal = Terminal::new(TestBackend::new(120, 6)).unwrap();
        terminal.draw(|f| render(f, f.area(), &view)).unwrap();
        let buffer = terminal.backend().buffer();
        let underlined: Vec<_> = (0..buffer.area.width)
            .filter(|x| buffer[(*x, 1)].modifier.contains(Modifier::UNDERLINED))
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(underlined.iter().any(|s| s == NOT_DONE));
        assert!(!underlined.iter().any(|s| s == "w"));
    }
}
