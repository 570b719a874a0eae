//! Wildcard query - matches terms against a wildcard pattern
//!
//! Patterns use `*` for any sequence of characters and `?` for a single
//! character. The pattern language is owned by the index engine; compilation
//! passes patterns through untouched.

use serde::{Deserialize, Serialize};

/// Query matching documents whose field holds a term matching `pattern`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WildcardQuery {
    /// Field to match against
    pub field: String,
    /// Wildcard pattern to match
    pub pattern: String,
}

impl WildcardQuery {
    /// Create a new wildcard query
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
        }
    }
}
