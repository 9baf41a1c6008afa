//! Interactive rooting analysis in the terminal
//!
//! Left: the analysis card (gene IDs, organism, trigger). Right: the results
//! table. The run loop is the coordinator between them: it turns the card's
//! `start-analysis` event into a service request and feeds the rows back
//! into the table.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{AnalysisOutcome, App, Focus};
pub use terminal::run;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    /// Draw into an in-memory terminal and return the buffer
    pub fn render<F>(width: u16, height: u16, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as one string per row
    pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn buffer_text(buf: &Buffer) -> String {
        buffer_lines(buf).join("\n")
    }
}
