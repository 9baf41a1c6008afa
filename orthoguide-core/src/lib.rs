//! orthoguide-core - view-models for the OrthoGuide rooting client
//!
//! Two independent pieces: the analysis form (identifier parsing, loading
//! state, `start-analysis` event) and the results table (records rendered
//! against a column spec). Plus the config file and a thin client for the
//! rooting service that the front end wires between them.

pub mod columns;
pub mod config;
pub mod error;
pub mod form;
pub mod identifiers;
pub mod organism;
pub mod record;
pub mod service;
pub mod table;

pub use columns::{Column, ColumnSpec};
pub use config::OrthoConfig;
pub use error::{OrthoError, Result};
pub use form::{AnalysisForm, FormEvent, FormView};
pub use identifiers::{parse_identifiers, IdentifierList};
pub use organism::Organism;
pub use record::ResultRecord;
pub use service::{HttpRootsService, RootsService};
pub use table::TableView;
