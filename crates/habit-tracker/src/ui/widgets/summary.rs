//! Week summary bar

use libhabit_core::{GridView, WeeklyGrid};
use ratatui::{prelude::*, widgets::Paragraph};

/// Render the week label, its date range, and the completion count
pub fn render(frame: &mut Frame, area: Rect, view: &GridView, grid: &WeeklyGrid) {
    let range = view
        .week
        .monday()
        .map(|monday| {
            let sunday = monday + chrono::Duration::days(6);
            format!("  ({} - {})", monday.format("%b %d"), sunday.format("%b %d"))
        })
        .unwrap_or_default();

    let (done, total) = grid.completion_totals();
    let percent = if total == 0 { 0.0 } else { done as f64 * 100.0 / total as f64 };

    let text = format!(
        " Week {}{}  |  Done: {}/{} ({:.0}%) ",
        view.week, range, done, total, percent
    );

    let bar = Paragraph::new(text)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(bar, area);
}
