//! Analysis card: gene ID text box, organism selector and trigger

use crossterm::event::KeyEvent;
use orthoguide_core::{AnalysisForm, FormView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use super::{border_style, ACCENT, SECONDARY};
use crate::tui::app::Focus;
use crate::ui::spinner_frame;

const PLACEHOLDER: &str = "One gene ID per line, e.g. TP53";

/// Input form widget backed by `AnalysisForm`
pub struct AnalysisCard<'a> {
    pub form: AnalysisForm,
    textarea: TextArea<'a>,
}

impl<'a> AnalysisCard<'a> {
    pub fn new(form: AnalysisForm) -> Self {
        let mut card = Self {
            form,
            textarea: TextArea::default(),
        };
        card.style_textarea();
        card
    }

    fn style_textarea(&mut self) {
        self.textarea.set_placeholder_text(PLACEHOLDER);
        self.textarea
            .set_placeholder_style(Style::default().fg(SECONDARY));
    }

    /// Feed a key to the text box and resync the form
    pub fn handle_input(&mut self, key: KeyEvent) {
        if self.textarea.input(key) {
            self.sync_form();
        }
    }

    /// Replace the text box contents
    pub fn set_text(&mut self, text: &str) {
        self.textarea = TextArea::from(text.split('\n').map(str::to_string));
        self.style_textarea();
        self.sync_form();
    }

    fn sync_form(&mut self) {
        self.form.set_text(self.textarea.lines().join("\n"));
    }

    /// Render the card; `tick` drives the busy spinner
    pub fn render(&mut self, f: &mut Frame, area: Rect, focus: Focus, tick: usize) {
        let view = self.form.view();
        let card_focused = matches!(focus, Focus::Genes | Focus::Organism | Focus::Submit);

        let outer = Block::default()
            .title(format!(" {} ", view.title))
            .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border_style(card_focused));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Gene IDs
                Constraint::Length(3), // Organism
                Constraint::Length(3), // Trigger
            ])
            .split(inner);

        self.render_genes(f, chunks[0], focus == Focus::Genes);
        render_organism(f, chunks[1], &view, focus == Focus::Organism);
        render_trigger(f, chunks[2], &view, focus == Focus::Submit, tick);
    }

    fn render_genes(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let count = self.form.identifiers().len();
        self.textarea.set_block(
            Block::default()
                .title(format!(" Gene IDs ({}) ", count))
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );

        if focused {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }

        f.render_widget(&self.textarea, area);
    }
}

fn render_organism(f: &mut Frame, area: Rect, view: &FormView, focused: bool) {
    let label = view
        .organisms
        .get(view.selected_organism)
        .map(String::as_str)
        .unwrap_or("");

    let line = if focused && view.organisms.len() > 1 {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(ACCENT)),
            Span::raw(label.to_string()),
            Span::styled(" ▶", Style::default().fg(ACCENT)),
        ])
    } else {
        Line::from(label.to_string())
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Organism ")
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );
    f.render_widget(paragraph, area);
}

fn render_trigger(f: &mut Frame, area: Rect, view: &FormView, focused: bool, tick: usize) {
    let style = if view.button_disabled {
        Style::default().fg(SECONDARY)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };

    let mut spans = Vec::new();
    if view.show_spinner {
        spans.push(Span::styled(
            format!("{} ", spinner_frame(tick)),
            Style::default().fg(ACCENT),
        ));
    }
    spans.push(Span::styled(view.button_label.clone(), style));

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused && !view.button_disabled)),
        );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{buffer_text, render};
    use crate::ui::SPINNER_FRAMES;
    use crossterm::event::{KeyCode, KeyModifiers};
    use orthoguide_core::FormEvent;

    fn draw(card: &mut AnalysisCard<'_>, tick: usize) -> String {
        let buf = render(50, 16, |f| {
            let area = f.area();
            card.render(f, area, Focus::Genes, tick)
        });
        buffer_text(&buf)
    }

    #[test]
    fn test_renders_form_elements() {
        let mut card = AnalysisCard::new(AnalysisForm::default());
        let screen = draw(&mut card, 0);

        assert!(screen.contains("Rooting Analysis"));
        assert!(screen.contains("Gene IDs (0)"));
        assert!(screen.contains("Organism"));
        assert!(screen.contains("Homo sapiens (hsa)"));
        assert!(screen.contains("Infer Roots"));
    }

    #[test]
    fn test_typed_text_emits_parsed_ids() {
        let mut card = AnalysisCard::new(AnalysisForm::default());
        for c in "TP53".chars() {
            card.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        card.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        card.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        for c in " EGFR ".chars() {
            card.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        assert_eq!(card.form.text(), "TP53\n\n EGFR ");
        assert_eq!(
            card.form.submit(),
            Some(FormEvent::StartAnalysis("TP53\nEGFR".parse().unwrap()))
        );
        assert!(draw(&mut card, 0).contains("Gene IDs (2)"));
    }

    #[test]
    fn test_loading_state_shows_spinner_and_label() {
        let mut form = AnalysisForm::default();
        form.set_loading(true);
        let mut card = AnalysisCard::new(form);
        card.set_text("TP53");

        let screen = draw(&mut card, 3);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("Infer Roots"));

        let frame = SPINNER_FRAMES.chars().nth(3).unwrap();
        assert!(screen.contains(frame));
        assert!(card.form.submit().is_none());
    }

    #[test]
    fn test_set_text_replaces_contents() {
        let mut card = AnalysisCard::new(AnalysisForm::default());
        card.set_text("NRP1\nCDK6");
        card.set_text("");
        assert_eq!(card.form.text(), "");
        assert!(card.form.submit().is_none());
    }
}
