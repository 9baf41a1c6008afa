//! Result records returned by the rooting service
//!
//! A record is an opaque JSON object. Only the fields named by the active
//! column spec are ever looked at, and they are turned into display text the
//! same way a browser would stringify them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One row of analysis output, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRecord(Map<String, Value>);

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text for a field; missing fields and nulls render empty
    pub fn cell_text(&self, field: &str) -> String {
        self.get(field).map(display_value).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for ResultRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Stringify a JSON value for a table cell
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        // Nested values are not expected in rooting rows; show them compactly
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map(format_float).unwrap_or_else(|| n.to_string())
}

/// Format a float like `String(x)`: whole values drop the fraction (37.0 -> "37"),
/// and magnitudes from 1e21 up or below 1e-6 switch to exponent form ("1e+21", "1e-7")
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        // Also covers -0.0
        return "0".to_string();
    }
    let magnitude = x.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return exponent_form(x);
    }
    if x.fract() == 0.0 {
        return format!("{:.0}", x);
    }
    x.to_string()
}

/// Shortest round-trip digits with a signed exponent
fn exponent_form(x: f64) -> String {
    let formatted = format!("{:e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}
