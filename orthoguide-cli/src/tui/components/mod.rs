pub mod analysis_card;
pub mod results_table;
pub mod status_bar;

pub use analysis_card::AnalysisCard;
pub use results_table::ResultsTable;

use ratatui::style::{Color, Style};

/// Primary accent color
pub const ACCENT: Color = Color::Cyan;
/// Secondary color for unfocused borders
pub const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the selected row
pub const HIGHLIGHT: Color = Color::Yellow;

/// Border style for a widget, accented when focused
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    }
}
