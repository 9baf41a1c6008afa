//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::app::{App, Focus};
use super::components::status_bar;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Content + status line
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    // Analysis card (left) + results table (right)
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    let focus = app.focus;
    let tick = app.tick;
    app.card.render(frame, panes[0], focus, tick);
    app.results.render(frame, panes[1], focus == Focus::Results);

    status_bar::render(frame, rows[1], app);
}
