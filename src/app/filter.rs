//! Record filtering
//!
//! Derives the visible subset of a record set from a [`FilterState`]: a
//! case-insensitive substring match on one selected field.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::app::models::{Field, Record};

/// The (field, query) pair driving the visible subset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Field the query is matched against
    pub field: Field,
    /// Substring to look for; empty matches everything
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            field: Field::State,
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Create a filter on `field` for `query`
    pub fn new(field: Field, query: impl Into<String>) -> Self {
        Self {
            field,
            query: query.into(),
        }
    }

    /// Whether this filter lets every record through
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Whether a single record passes this filter
    pub fn matches(&self, record: &Record) -> bool {
        self.is_empty() || contains_folded(record.get(self.field), &self.query.to_lowercase())
    }
}

/// Select the records visible under `state`, preserving order
///
/// An empty query borrows the input unchanged.
pub fn filter_records<'a>(records: &'a [Record], state: &FilterState) -> Cow<'a, [Record]> {
    if state.is_empty() {
        return Cow::Borrowed(records);
    }

    let needle = state.query.to_lowercase();
    Cow::Owned(
        records
            .iter()
            .filter(|record| contains_folded(record.get(state.field), &needle))
            .cloned()
            .collect(),
    )
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
