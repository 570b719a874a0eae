//! Query clause tree - the recursive input to compilation

use serde::{Deserialize, Serialize};

use super::term::QueryTerm;

/// Whether a clause's match is required, forbidden, or optional-but-scored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurrence {
    #[default]
    #[serde(rename = "MUST_OCCUR")]
    Must,
    #[serde(rename = "MUST_NOT_OCCUR")]
    MustNot,
    #[serde(rename = "SHOULD_OCCUR")]
    Should,
}

/// One node in the query specification tree
///
/// Exactly one of `term` / `boolean_clauses` must be set; the compiler
/// rejects anything else with `InvalidClause`. An absent occurrence means
/// [`Occurrence::Must`] and is resolved through [`effective_occurrence`]
/// wherever a clause is translated, never by writing into the tree.
///
/// [`effective_occurrence`]: QueryClause::effective_occurrence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryClause {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<Occurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<QueryTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_clauses: Option<Vec<QueryClause>>,
}

impl QueryClause {
    /// Leaf clause matching a single term
    pub fn term(term: QueryTerm) -> Self {
        Self {
            occurrence: None,
            term: Some(term),
            boolean_clauses: None,
        }
    }

    /// Boolean group over child clauses, in order
    pub fn group(clauses: Vec<QueryClause>) -> Self {
        Self {
            occurrence: None,
            term: None,
            boolean_clauses: Some(clauses),
        }
    }

    /// Set the occurrence
    pub fn with_occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = Some(occurrence);
        self
    }

    /// The clause occurrence with the absent-means-MUST default applied
    pub fn effective_occurrence(&self) -> Occurrence {
        self.occurrence.unwrap_or_default()
    }
}
