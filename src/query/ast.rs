//! Executable query tree handed to the index engine
//!
//! [`IndexQuery`] is a closed union over the node types the engine
//! understands. Keeping it closed lets every consumer match exhaustively, so
//! a new node kind cannot be silently ignored.

use serde::{Deserialize, Serialize};

use super::nodes::{
    BoolQuery, PhraseQuery, PrefixQuery, RangeQuery, TermQuery, TermsQuery, WildcardQuery,
};

/// One executable query node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndexQuery {
    /// Matches every document in the index
    MatchAll,
    /// Exact match on one field value
    Term(TermQuery),
    /// Set membership over one field
    Terms(TermsQuery),
    /// Prefix match on one field
    Prefix(PrefixQuery),
    /// Wildcard pattern match on one field
    Wildcard(WildcardQuery),
    /// Ordered multi-token phrase over one field
    Phrase(PhraseQuery),
    /// Point range over a numeric field
    Range(RangeQuery),
    /// Boolean composition of child queries
    Bool(BoolQuery),
}

impl IndexQuery {
    /// Query type name for logging and diagnostics
    pub fn query_type(&self) -> &'static str {
        match self {
            IndexQuery::MatchAll => "match_all",
            IndexQuery::Term(_) => "term",
            IndexQuery::Terms(_) => "terms",
            IndexQuery::Prefix(_) => "prefix",
            IndexQuery::Wildcard(_) => "wildcard",
            IndexQuery::Phrase(_) => "phrase",
            IndexQuery::Range(_) => "range",
            IndexQuery::Bool(_) => "bool",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_type_names() {
        assert_eq!(IndexQuery::MatchAll.query_type(), "match_all");
        let term = IndexQuery::Term(TermQuery::new("name", "alpha"));
        assert_eq!(term.query_type(), "term");
        let boolean = IndexQuery::Bool(BoolQuery::new());
        assert_eq!(boolean.query_type(), "bool");
    }

    #[test]
    fn test_tagged_serialization() {
        let query = IndexQuery::Term(TermQuery::new("name", "alpha"));
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["kind"], "term");
        assert_eq!(json["field"], "name");

        let parsed: IndexQuery = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, query);
    }
}
