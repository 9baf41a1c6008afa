/// Structured error types for orthoguide-core.
///
/// Parsing and rendering never fail; these errors only come from the outer
/// surfaces (config file, rooting service). The binary wraps them in `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for orthoguide-core operations
#[derive(Error, Debug)]
pub enum OrthoError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration file could not be read or is invalid
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Config file contains invalid TOML
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Transport-level failure talking to the rooting service
    #[error("Request to rooting service failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// Rooting service answered with a non-success status
    #[error("Rooting service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    /// Organism code is not in the configured catalogue
    #[error("Unknown organism code '{code}' (allowed: {allowed})")]
    UnknownOrganism { code: String, allowed: String },
}

/// Result type alias for orthoguide-core operations
pub type Result<T> = std::result::Result<T, OrthoError>;

impl OrthoError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a service error from a status code and detail message
    pub fn service(status: u16, detail: impl Into<String>) -> Self {
        Self::Service {
            status,
            detail: detail.into(),
        }
    }

    /// Create an unknown organism error listing the allowed codes
    pub fn unknown_organism<'a>(
        code: impl Into<String>,
        allowed: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownOrganism {
            code: code.into(),
            allowed: allowed.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
