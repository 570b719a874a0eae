//! Prefix query - matches terms starting with a prefix

use serde::{Deserialize, Serialize};

/// Query matching documents whose field holds a term starting with `prefix`
///
/// This is a specialized and cheaper form of wildcard query for patterns
/// shaped like `prefix*`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrefixQuery {
    /// Field to match against
    pub field: String,
    /// Prefix to match
    pub prefix: String,
}

impl PrefixQuery {
    /// Create a new prefix query
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: prefix.into(),
        }
    }
}
