//! Reference organisms offered by the analysis form

use serde::{Deserialize, Serialize};

use crate::error::{OrthoError, Result};

/// A selectable reference organism (species code understood by the service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    /// Species code, e.g. "hsa"
    pub code: String,
    /// Display name, e.g. "Homo sapiens"
    pub name: String,
}

impl Organism {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Human, the only species the rooting service currently accepts
    pub fn human() -> Self {
        Self::new("hsa", "Homo sapiens")
    }

    /// Selector label, e.g. "Homo sapiens (hsa)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Default organism catalogue
pub fn default_organisms() -> Vec<Organism> {
    vec![Organism::human()]
}

/// Position of `code` in `organisms`, or an error naming the allowed codes
pub fn find_organism(organisms: &[Organism], code: &str) -> Result<usize> {
    organisms
        .iter()
        .position(|o| o.code == code)
        .ok_or_else(|| OrthoError::unknown_organism(code, organisms.iter().map(|o| o.code.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_organism() {
        let organisms = vec![Organism::human(), Organism::new("dme", "Drosophila melanogaster")];
        assert_eq!(find_organism(&organisms, "dme").unwrap(), 1);

        let err = find_organism(&organisms, "mmu").unwrap_err();
        assert!(err.to_string().contains("hsa, dme"));
    }

    #[test]
    fn test_label() {
        assert_eq!(Organism::human().label(), "Homo sapiens (hsa)");
    }
}
