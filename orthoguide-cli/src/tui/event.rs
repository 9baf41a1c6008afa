//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use orthoguide_core::IdentifierList;

use super::app::{App, Focus};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// The form emitted `start-analysis`
    StartAnalysis(IdentifierList),
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            KeyCode::Char('s') => return submit(app),
            _ => {}
        }
    }

    match key.code {
        KeyCode::F(5) => return submit(app),
        KeyCode::Tab => {
            app.focus_next();
            return HandleResult::Continue;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return HandleResult::Continue;
        }
        _ => {}
    }

    match app.focus {
        Focus::Genes => handle_genes(app, key),
        Focus::Organism => handle_organism(app, key),
        Focus::Submit => handle_submit(app, key),
        Focus::Results => handle_results(app, key),
    }
}

fn submit(app: &mut App) -> HandleResult {
    match app.submit() {
        Some(ids) => HandleResult::StartAnalysis(ids),
        None => HandleResult::Continue,
    }
}

/// Text box: everything except Esc goes to the textarea
fn handle_genes(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Submit),
        _ => app.card.handle_input(key),
    }
    HandleResult::Continue
}

fn handle_organism(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => return HandleResult::Quit,
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.card.form.select_prev_organism()
        }
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('j')
        | KeyCode::Char(' ') => app.card.form.select_next_organism(),
        KeyCode::Enter => app.set_focus(Focus::Submit),
        _ => {}
    }
    HandleResult::Continue
}

fn handle_submit(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => submit(app),
        KeyCode::Esc => {
            app.set_focus(Focus::Genes);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

fn handle_results(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => return HandleResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.results.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.results.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.results.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.results.select_last(),
        KeyCode::Esc => app.set_focus(Focus::Genes),
        _ => {}
    }
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthoguide_core::{Organism, OrthoConfig};

    fn app() -> App<'static> {
        App::new(&OrthoConfig::default(), "hsa").unwrap()
    }

    fn press(app: &mut App, code: KeyCode) -> HandleResult {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> HandleResult {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            press(app, code);
        }
    }

    #[test]
    fn test_ctrl_s_emits_parsed_ids() {
        let mut app = app();
        type_text(&mut app, "TP53\nBRCA1\n\nEGFR ");

        assert_eq!(
            ctrl(&mut app, 's'),
            HandleResult::StartAnalysis(IdentifierList::parse("TP53\nBRCA1\nEGFR"))
        );
    }

    #[test]
    fn test_submit_with_empty_input_does_nothing() {
        let mut app = app();
        assert_eq!(ctrl(&mut app, 's'), HandleResult::Continue);
        assert_eq!(press(&mut app, KeyCode::F(5)), HandleResult::Continue);

        app.focus = Focus::Submit;
        assert_eq!(press(&mut app, KeyCode::Enter), HandleResult::Continue);
    }

    #[test]
    fn test_submit_while_loading_does_nothing() {
        let mut app = app();
        type_text(&mut app, "CDK6");
        app.start_analysis(&IdentifierList::parse("CDK6"));

        assert_eq!(ctrl(&mut app, 's'), HandleResult::Continue);
    }

    #[test]
    fn test_q_is_text_in_gene_box() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Continue);
        assert_eq!(app.card.form.text(), "q");

        app.focus = Focus::Results;
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Quit);
    }

    #[test]
    fn test_global_quit() {
        let mut app = app();
        assert_eq!(ctrl(&mut app, 'c'), HandleResult::Quit);
    }

    #[test]
    fn test_tab_and_esc_move_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Organism);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Genes);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_tab_brings_back_key_hints() {
        let mut app = app();
        app.set_status("Error: Rooting service returned 500: Database query failed");

        press(&mut app, KeyCode::Tab);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_organism_selector_keys() {
        let mut config = OrthoConfig::default();
        config
            .analysis
            .organisms
            .push(Organism::new("dme", "Drosophila melanogaster"));
        let mut app = App::new(&config, "hsa").unwrap();
        app.focus = Focus::Organism;

        press(&mut app, KeyCode::Right);
        assert_eq!(app.card.form.species(), "dme");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.card.form.species(), "hsa");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.card.form.species(), "dme");
    }
}
