use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::SECONDARY;
use crate::tui::app::{App, Focus};

/// Key hints for the focused widget
pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Genes => "one gene ID per line | Ctrl-S: infer roots | Tab: next | Esc: leave",
        Focus::Organism => "←/→: change organism | Tab: next | q: quit",
        Focus::Submit => "Enter: infer roots | Tab: next | q: quit",
        Focus::Results => "j/k: move | g/G: top/bottom | Tab: next | q: quit",
    }
}

/// Render the status bar (bottom line)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let time_str = Local::now().format("%H:%M:%S").to_string();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.focus.display_name()),
            Style::default()
                .fg(Color::Black)
                .bg(app.focus.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    match &app.status_message {
        Some(msg) => spans.push(Span::raw(msg.clone())),
        None => spans.push(Span::styled(hints(app.focus), Style::default().fg(SECONDARY))),
    }

    // Right-aligned clock
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(SECONDARY),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
