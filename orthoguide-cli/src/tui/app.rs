//! Application state for the rooting TUI

use anyhow::Result;
use orthoguide_core::{AnalysisForm, FormEvent, IdentifierList, OrthoConfig, ResultRecord};
use ratatui::style::Color;
use tracing::{info, warn};

use super::components::{AnalysisCard, ResultsTable};

/// Which widget receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Gene ID text box
    #[default]
    Genes,
    /// Organism selector
    Organism,
    /// "Infer Roots" trigger
    Submit,
    /// Results table
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Genes => Focus::Organism,
            Focus::Organism => Focus::Submit,
            Focus::Submit => Focus::Results,
            Focus::Results => Focus::Genes,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Genes => Focus::Results,
            Focus::Organism => Focus::Genes,
            Focus::Submit => Focus::Organism,
            Focus::Results => Focus::Submit,
        }
    }

    /// Label for the status bar
    pub fn display_name(self) -> &'static str {
        match self {
            Focus::Genes => "GENES",
            Focus::Organism => "ORGANISM",
            Focus::Submit => "SUBMIT",
            Focus::Results => "RESULTS",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Focus::Genes => Color::Green,
            Focus::Organism => Color::Magenta,
            Focus::Submit => Color::Yellow,
            Focus::Results => Color::Cyan,
        }
    }
}

/// Result of a finished service request, sent back to the run loop
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub genes: IdentifierList,
    pub species: String,
    pub result: orthoguide_core::Result<Vec<ResultRecord>>,
}

/// Main application state
pub struct App<'a> {
    /// Input form (gene IDs, organism, trigger)
    pub card: AnalysisCard<'a>,
    /// Results of the last successful analysis
    pub results: ResultsTable,
    pub focus: Focus,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
    /// Advances every frame while a request is in flight
    pub tick: usize,
}

impl<'a> App<'a> {
    /// Build the app from config, preselecting `species`
    pub fn new(config: &OrthoConfig, species: &str) -> Result<Self> {
        let form = AnalysisForm::with_species(config.analysis.organisms.clone(), species)?;

        Ok(Self {
            card: AnalysisCard::new(form),
            results: ResultsTable::new(config.table.columns.clone()),
            focus: Focus::default(),
            status_message: None,
            tick: 0,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.card.form.is_loading()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// Move focus; the status message gives way to key hints unless a request is running
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if !self.is_loading() {
            self.status_message = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Press the trigger; returns identifiers to analyse if the form emitted
    pub fn submit(&mut self) -> Option<IdentifierList> {
        match self.card.form.submit()? {
            FormEvent::StartAnalysis(ids) => Some(ids),
        }
    }

    /// Called by the coordinator once a request is dispatched
    pub fn start_analysis(&mut self, genes: &IdentifierList) {
        self.card.form.set_loading(true);
        self.tick = 0;
        info!(count = genes.len(), species = %self.card.form.species(), "analysis started");
        self.set_status(format!("Inferring roots for {} gene(s)...", genes.len()));
    }

    /// Called by the coordinator when a request completes
    pub fn finish_analysis(&mut self, outcome: AnalysisOutcome) {
        self.card.form.set_loading(false);

        match outcome.result {
            Ok(rows) => {
                info!(rows = rows.len(), "analysis finished");
                let msg = if rows.is_empty() {
                    format!("No roots found for {} gene(s) in {}", outcome.genes.len(), outcome.species)
                } else {
                    format!(
                        "{} root(s) for {} gene(s) in {}",
                        rows.len(),
                        outcome.genes.len(),
                        outcome.species
                    )
                };
                let has_rows = !rows.is_empty();
                self.results.set_records(rows);
                if has_rows {
                    self.focus = Focus::Results;
                }
                self.set_status(msg);
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                self.set_status(format!("Error: {}", err));
            }
        }
    }

    /// Advance animation state (once per frame)
    pub fn on_tick(&mut self) {
        if self.is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthoguide_core::OrthoError;

    fn app() -> App<'static> {
        App::new(&OrthoConfig::default(), "hsa").unwrap()
    }

    fn cdk6() -> ResultRecord {
        ResultRecord::new()
            .with("preferred_name", "CDK6")
            .with("clade_name", "Metamonada")
            .with("root", 37.0)
            .with("cog_id", "KOG0594")
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Genes;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Genes);
        assert_eq!(Focus::Genes.prev(), Focus::Results);
    }

    #[test]
    fn test_unknown_species_rejected() {
        assert!(App::new(&OrthoConfig::default(), "mmu").is_err());
    }

    #[test]
    fn test_submit_and_loading_cycle() {
        let mut app = app();
        app.card.set_text("TP53\nBRCA1\n\nEGFR ");

        let ids = app.submit().expect("identifiers emitted");
        assert_eq!(ids.to_vec(), vec!["TP53", "BRCA1", "EGFR"]);

        app.start_analysis(&ids);
        assert!(app.is_loading());
        assert!(app.submit().is_none());

        app.finish_analysis(AnalysisOutcome {
            genes: ids,
            species: "hsa".into(),
            result: Ok(vec![cdk6()]),
        });
        assert!(!app.is_loading());
        assert_eq!(app.focus, Focus::Results);
        assert_eq!(app.results.view().rows[0], vec!["CDK6", "Metamonada", "37", "KOG0594"]);
    }

    #[test]
    fn test_empty_submit_is_silent() {
        let mut app = app();
        assert!(app.submit().is_none());
        assert!(app.status_message.is_none());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_failed_analysis_keeps_previous_rows() {
        let mut app = app();
        app.results.set_records(vec![cdk6()]);

        let genes = IdentifierList::parse("NRP1");
        app.start_analysis(&genes);
        app.finish_analysis(AnalysisOutcome {
            genes,
            species: "hsa".into(),
            result: Err(OrthoError::service(500, "Database query failed")),
        });

        assert!(!app.is_loading());
        assert_eq!(app.results.len(), 1);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Error: Rooting service returned 500: Database query failed")
        );
    }

    #[test]
    fn test_focus_change_clears_finished_status() {
        let mut app = app();
        let genes = IdentifierList::parse("CDK6");
        app.start_analysis(&genes);

        // Status survives focus moves while the request runs
        app.focus_next();
        assert!(app.status_message.is_some());

        app.finish_analysis(AnalysisOutcome {
            genes,
            species: "hsa".into(),
            result: Ok(vec![cdk6()]),
        });
        assert_eq!(app.status_message.as_deref(), Some("1 root(s) for 1 gene(s) in hsa"));

        app.focus_next();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_tick_only_advances_while_loading() {
        let mut app = app();
        app.on_tick();
        assert_eq!(app.tick, 0);

        app.start_analysis(&IdentifierList::parse("TP53"));
        app.on_tick();
        app.on_tick();
        assert_eq!(app.tick, 2);
    }
}
