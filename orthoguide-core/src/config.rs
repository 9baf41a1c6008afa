use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::columns::ColumnSpec;
use crate::error::{OrthoError, Result};
use crate::organism::{default_organisms, find_organism, Organism};

/// Bundled config template (written by `orthoguide config init`)
pub const CONFIG_TEMPLATE: &str = include_str!("../../orthoguide.config.template.toml");

/// Configuration for the orthoguide client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrthoConfig {
    pub api: ApiConfig,
    pub analysis: AnalysisConfig,
    pub table: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the rooting service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Species code preselected in the form
    pub default_species: String,
    /// Organisms offered by the selector
    pub organisms: Vec<Organism>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_species: "hsa".to_string(),
            organisms: default_organisms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub columns: ColumnSpec,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: ColumnSpec::rooting(),
        }
    }
}

impl OrthoConfig {
    /// Load config from `config_path()`, falling back to defaults when the file is absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_toml(&content).map_err(|source| OrthoError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            debug!(path = %path.display(), "config not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.expand_variables();
        config.validate()?;

        Ok(config)
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Config file path: $ORTHOGUIDE_CONFIG or ~/.orthoguide/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("ORTHOGUIDE_CONFIG") {
            return PathBuf::from(path);
        }
        Self::home_dir().join("config.toml")
    }

    /// ~/.orthoguide (log file, config)
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".orthoguide")
    }

    /// ORTHOGUIDE_API_URL wins over the file
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("ORTHOGUIDE_API_URL") {
            if !url.trim().is_empty() {
                debug!(%url, "api.base_url overridden from environment");
                self.api.base_url = url;
            }
        }
    }

    /// Expand ${VAR} references in api.base_url
    fn expand_variables(&mut self) {
        let vars: HashMap<String, String> = env::vars().collect();
        self.api.base_url = expand_string(&self.api.base_url, &vars);
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(OrthoError::config(format!(
                "api.base_url must start with http:// or https:// (got '{}')",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(OrthoError::config("api.timeout_secs must be greater than 0"));
        }
        if self.analysis.organisms.is_empty() {
            return Err(OrthoError::config("analysis.organisms must not be empty"));
        }
        find_organism(&self.analysis.organisms, &self.analysis.default_species)?;
        if self.table.columns.is_empty() {
            return Err(OrthoError::config("table.columns must not be empty"));
        }
        Ok(())
    }

    /// Write the config as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| OrthoError::config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, toml_str)?;
        Ok(())
    }
}

/// Replace ${key} with its value; unknown keys are left as-is
fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
    let mut result = s.to_string();

    for (key, value) in vars {
        let pattern = format!("${{{}}}", key);
        if result.contains(&pattern) {
            result = result.replace(&pattern, value);
        }
    }

    result
}
