//! Gene identifier parsing
//!
//! The form accepts one identifier per line. Lines are trimmed, blank lines
//! are dropped, and everything else is kept in source order. Duplicates are
//! left in place; deciding whether to collapse them is up to whoever sends
//! the request.

use std::convert::Infallible;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered list of non-empty, trimmed identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierList(Vec<String>);

impl IdentifierList {
    /// Parse free-form text into identifiers (one per line)
    pub fn parse(text: &str) -> Self {
        Self(parse_identifiers(text))
    }

    /// Build a list from already-split tokens, applying the same trimming rule
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .filter_map(|t| {
                    let t = trim_identifier(t.as_ref());
                    (!t.is_empty()).then(|| t.to_string())
                })
                .collect(),
        )
    }

    /// Join identifiers with a separator (e.g. "," for query strings)
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for IdentifierList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for IdentifierList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a IdentifierList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for IdentifierList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Split text on line breaks, trim each line and drop the blank ones.
///
/// Both `\n` and `\r` count as breaks, so CRLF and bare CR input behave the
/// same as LF. Whitespace inside a line is left alone.
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(trim_identifier)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim Unicode whitespace plus U+FEFF (byte-order mark / zero-width no-break space)
fn trim_identifier(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
