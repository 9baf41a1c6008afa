//! Column specs for the results table

use serde::{Deserialize, Serialize};

/// A single column: header label plus the record field it reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text
    #[serde(alias = "title")]
    pub label: String,
    /// Record field shown in this column
    #[serde(alias = "data")]
    pub field: String,
}

impl Column {
    pub fn new(label: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field: field.into(),
        }
    }
}

/// Ordered list of columns
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec(Vec<Column>);

impl ColumnSpec {
    pub fn new(columns: Vec<Column>) -> Self {
        Self(columns)
    }

    /// Default layout for rooting results
    pub fn rooting() -> Self {
        Self(vec![
            Column::new("Gene", "preferred_name"),
            Column::new("Root Clade", "clade_name"),
            Column::new("Root ID", "root"),
            Column::new("COG ID", "cog_id"),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.label.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.field.as_str())
    }
}

impl FromIterator<Column> for ColumnSpec {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
