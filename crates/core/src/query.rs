//! Query identifiers and batch parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied lookup query (barcode, UPC, or free text).
///
/// Always non-empty after trimming; construction rejects blank input
/// before any upstream call is made.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Create from a string, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> crate::Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(crate::Error::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the query string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query({self})")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse newline-separated queries (as staged from a bulk upload).
///
/// Blank lines are dropped; `\r\n` line endings are tolerated.
pub fn parse_lines(text: &str) -> Vec<Query> {
    text.lines().filter_map(|line| Query::new(line).ok()).collect()
}

/// Parse a comma-separated query list (as supplied via `?q=`).
pub fn parse_comma_list(text: &str) -> Vec<Query> {
    text.split(',').filter_map(|part| Query::new(part).ok()).collect()
}
