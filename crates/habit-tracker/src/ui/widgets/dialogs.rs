//! Modal dialog widgets drawn over the grid

use libhabit_core::Color as HabitColor;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::dialogs::{AddForm, ConfirmRemove, RemovePicker};
use crate::keymap::HELP_TEXT;
use crate::ui::habit_color;
use crate::ui::layout::centered_rect;

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let rect = centered_rect(54, 12, area);
    frame.render_widget(Clear, rect);

    let mut lines: Vec<Line> = vec![
        Line::from("Habit Tracker Keybindings:").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    lines.extend(HELP_TEXT.lines().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from("Press any key to close").style(Style::default().fg(Color::DarkGray)));

    let help = Paragraph::new(lines).block(dialog_block("Help"));
    frame.render_widget(help, rect);
}

pub fn render_add(frame: &mut Frame, area: Rect, form: &AddForm) {
    let rect = centered_rect(60, 9, area);
    frame.render_widget(Clear, rect);

    let swatches: Vec<Span> = HabitColor::ALL
        .iter()
        .flat_map(|c| {
            let mut style = Style::default().fg(habit_color(*c));
            if *c == form.color {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            [Span::styled(c.as_str(), style), Span::raw(" ")]
        })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::raw("Habit Name: "),
            Span::styled(
                format!("{}_", form.name),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::raw("Color: "), Span::styled(form.color.as_str(), Style::default().fg(habit_color(form.color)))]),
        Line::from(swatches),
        Line::from(""),
        Line::from("[Enter] Save  [←/→] Color  [Esc] Cancel").style(Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block("Add New Habit"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, rect);
}

pub fn render_remove(frame: &mut Frame, area: Rect, picker: &RemovePicker) {
    let height = (picker.names.len() as u16).saturating_add(4);
    let rect = centered_rect(40, height, area);
    frame.render_widget(Clear, rect);

    let mut lines: Vec<Line> = picker
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == picker.selected {
                Line::from(format!("> {}", name)).style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Line::from(format!("  {}", name))
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from("[Enter] Select  [Esc] Cancel").style(Style::default().fg(Color::DarkGray)));

    let list = Paragraph::new(lines).block(dialog_block("Select Habit to Remove"));
    frame.render_widget(list, rect);
}

pub fn render_confirm(frame: &mut Frame, area: Rect, confirm: &ConfirmRemove) {
    let rect = centered_rect(50, 5, area);
    frame.render_widget(Clear, rect);

    let lines = vec![
        Line::from(format!("Are you sure you want to remove '{}'?", confirm.name)),
        Line::from(""),
        Line::from("[y] Yes  [n] No").style(Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(dialog_block("Confirm"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(draw: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(draw).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_add_form_shows_name_and_color() {
        let form = AddForm { name: "yoga".to_string(), color: HabitColor::Purple };
        let text = screen(|f| render_add(f, f.area(), &form));
        assert!(text.contains("Add New Habit"));
        assert!(text.contains("yoga_"));
        assert!(text.contains("Color: purple"));
    }

    #[test]
    fn test_remove_marks_selection() {
        let mut picker = RemovePicker::new(vec!["water".into(), "read".into()]).unwrap();
        picker.selected = 1;
        let text = screen(|f| render_remove(f, f.area(), &picker));
        assert!(text.contains("> read"));
        assert!(text.contains("  water"));
    }

    #[test]
    fn test_confirm_names_habit() {
        let confirm = ConfirmRemove::new("read".into());
        let text = screen(|f| render_confirm(f, f.area(), &confirm));
        assert!(text.contains("remove 'read'?"));
    }
}
