//! Terms query - set membership over a single field
//!
//! Matches any document whose field equals one of the given values. This is
//! semantically equivalent to a SHOULD-disjunction of term queries over the
//! same field, but the engine evaluates it in a single pass.

use serde::{Deserialize, Serialize};

/// Query matching documents whose field equals any of the given values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermsQuery {
    /// Field to match against
    pub field: String,
    /// Values to match; a document needs to match at least one
    pub values: Vec<String>,
}

impl TermsQuery {
    /// Create a new terms query
    pub fn new(field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            values,
        }
    }

    /// Add a value to the set
    pub fn add_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Number of values in the set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the set contains the given value
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
