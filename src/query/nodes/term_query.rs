//! Term query - exact match on a single field value

use serde::{Deserialize, Serialize};

/// Query matching documents whose field holds exactly the given value
///
/// This is the most basic node: a straight lookup of `(field, value)` in the
/// engine's term dictionary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermQuery {
    /// Field to match against
    pub field: String,
    /// Exact value to match
    pub value: String,
}

impl TermQuery {
    /// Create a new term query
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_query_creation() {
        let query = TermQuery::new("status", "published");
        assert_eq!(query.field, "status");
        assert_eq!(query.value, "published");
    }
}
