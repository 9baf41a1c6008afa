//! Analysis form state and view-model
//!
//! The form owns the raw identifier text and the organism selection. The
//! loading flag is set from outside (whoever runs the request) and only
//! mirrored here: while it is set the trigger is disabled and `submit`
//! refuses to emit.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::identifiers::IdentifierList;
use crate::organism::{default_organisms, find_organism, Organism};

/// Heading shown above the form
pub const FORM_TITLE: &str = "Rooting Analysis";
/// Trigger label while idle
pub const SUBMIT_LABEL: &str = "Infer Roots";
/// Trigger label while a request is in flight
pub const LOADING_LABEL: &str = "Loading...";

/// Events emitted by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// User asked for an analysis of these identifiers
    StartAnalysis(IdentifierList),
}

impl FormEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            FormEvent::StartAnalysis(_) => "start-analysis",
        }
    }
}

/// Gene input form
#[derive(Debug, Clone)]
pub struct AnalysisForm {
    text: String,
    is_loading: bool,
    organisms: Vec<Organism>,
    selected: usize,
}

impl AnalysisForm {
    /// Create a form over an organism catalogue (falls back to the default one if empty)
    pub fn new(organisms: Vec<Organism>) -> Self {
        let organisms = if organisms.is_empty() {
            default_organisms()
        } else {
            organisms
        };

        Self {
            text: String::new(),
            is_loading: false,
            organisms,
            selected: 0,
        }
    }

    /// Create a form with `code` preselected
    pub fn with_species(organisms: Vec<Organism>, code: &str) -> Result<Self> {
        let mut form = Self::new(organisms);
        form.selected = find_organism(&form.organisms, code)?;
        Ok(form)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Identifiers currently in the text box
    pub fn identifiers(&self) -> IdentifierList {
        IdentifierList::parse(&self.text)
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn selected_organism(&self) -> &Organism {
        &self.organisms[self.selected]
    }

    /// Species code for the request
    pub fn species(&self) -> &str {
        &self.selected_organism().code
    }

    pub fn select_next_organism(&mut self) {
        self.selected = (self.selected + 1) % self.organisms.len();
    }

    pub fn select_prev_organism(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.organisms.len() - 1);
    }

    /// Trigger the analysis.
    ///
    /// Returns the event to dispatch, or `None` when the form is busy or the
    /// text holds no identifiers. Neither case is an error.
    pub fn submit(&self) -> Option<FormEvent> {
        if self.is_loading {
            debug!("submit ignored: request already in flight");
            return None;
        }

        let identifiers = self.identifiers();
        if identifiers.is_empty() {
            debug!("submit ignored: no identifiers");
            return None;
        }

        debug!(count = identifiers.len(), species = %self.species(), "start-analysis");
        Some(FormEvent::StartAnalysis(identifiers))
    }

    /// Build the view-model for rendering
    pub fn view(&self) -> FormView {
        FormView {
            title: FORM_TITLE.to_string(),
            text: self.text.clone(),
            organisms: self.organisms.iter().map(Organism::label).collect(),
            selected_organism: self.selected,
            button_label: if self.is_loading {
                LOADING_LABEL
            } else {
                SUBMIT_LABEL
            }
            .to_string(),
            button_disabled: self.is_loading,
            show_spinner: self.is_loading,
        }
    }
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self::new(default_organisms())
    }
}

/// Everything a renderer needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: String,
    pub text: String,
    /// Organism selector labels
    pub organisms: Vec<String>,
    pub selected_organism: usize,
    pub button_label: String,
    pub button_disabled: bool,
    /// Busy indicator next to the button
    pub show_spinner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_emits_parsed_identifiers() {
        let mut form = AnalysisForm::default();
        form.set_text("TP53\nBRCA1\n\nEGFR ");

        let event = form.submit().expect("event emitted");
        assert_eq!(event.name(), "start-analysis");
        let FormEvent::StartAnalysis(ids) = event;
        assert_eq!(ids.into_vec(), vec!["TP53", "BRCA1", "EGFR"]);
    }

    #[test]
    fn test_submit_with_empty_text_emits_nothing() {
        let mut form = AnalysisForm::default();
        form.set_text("");
        assert!(form.submit().is_none());

        form.set_text("\n   \n");
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_submit_with_only_byte_order_mark_emits_nothing() {
        let mut form = AnalysisForm::default();
        form.set_text("\u{FEFF}\n");
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_loading_disables_trigger() {
        let mut form = AnalysisForm::default();
        form.set_text("TP53");
        form.set_loading(true);

        assert!(form.submit().is_none());

        let view = form.view();
        assert!(view.button_disabled);
        assert!(view.show_spinner);
        assert_eq!(view.button_label, LOADING_LABEL);
    }

    #[test]
    fn test_idle_view() {
        let view = AnalysisForm::default().view();
        assert_eq!(view.title, "Rooting Analysis");
        assert_eq!(view.button_label, "Infer Roots");
        assert!(!view.button_disabled);
        assert!(!view.show_spinner);
        assert_eq!(view.organisms, vec!["Homo sapiens (hsa)"]);
    }

    #[test]
    fn test_loading_cleared_allows_submit_again() {
        let mut form = AnalysisForm::default();
        form.set_text("CDK6");
        form.set_loading(true);
        assert!(form.submit().is_none());
        form.set_loading(false);
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_organism_cycling() {
        let organisms = vec![
            Organism::human(),
            Organism::new("dme", "Drosophila melanogaster"),
            Organism::new("sce", "Saccharomyces cerevisiae"),
        ];
        let mut form = AnalysisForm::with_species(organisms, "dme").unwrap();
        assert_eq!(form.species(), "dme");

        form.select_next_organism();
        assert_eq!(form.species(), "sce");
        form.select_next_organism();
        assert_eq!(form.species(), "hsa");
        form.select_prev_organism();
        assert_eq!(form.species(), "sce");
    }

    #[test]
    fn test_unknown_species_rejected() {
        assert!(AnalysisForm::with_species(default_organisms(), "mmu").is_err());
    }

    #[test]
    fn test_empty_catalogue_falls_back_to_default() {
        let form = AnalysisForm::new(Vec::new());
        assert_eq!(form.species(), "hsa");
    }
}
