//! Status line widget

use ratatui::{prelude::*, widgets::Paragraph};

use crate::ui::Status;

/// Render the last command's message, red for errors
pub fn render(frame: &mut Frame, area: Rect, status: Option<&Status>) {
    let Some(status) = status else {
        return;
    };

    let style = if status.is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let paragraph = Paragraph::new(status.text.as_str())
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
