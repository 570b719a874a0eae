//! Boolean query - ordered child clauses with occurrence semantics

use serde::{Deserialize, Serialize};

use crate::query::ast::IndexQuery;
use crate::spec::Occurrence;

/// Occurrence requirement of one clause inside a boolean query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    Must,
    MustNot,
    Should,
}

impl From<Occurrence> for Occur {
    fn from(occurrence: Occurrence) -> Self {
        match occurrence {
            Occurrence::Must => Occur::Must,
            Occurrence::MustNot => Occur::MustNot,
            Occurrence::Should => Occur::Should,
        }
    }
}

impl From<Option<Occurrence>> for Occur {
    /// Total mapping; an absent occurrence means MUST
    fn from(occurrence: Option<Occurrence>) -> Self {
        occurrence.unwrap_or_default().into()
    }
}

/// One child of a boolean query together with its occurrence requirement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BooleanClause {
    pub occur: Occur,
    pub query: IndexQuery,
}

/// Boolean container composing child queries in order
///
/// An empty container matches vacuously under the engine's semantics, so an
/// empty clause list is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolQuery {
    pub clauses: Vec<BooleanClause>,
}

impl BoolQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause with the given occurrence
    pub fn push(&mut self, occur: Occur, query: IndexQuery) {
        self.clauses.push(BooleanClause { occur, query });
    }

    /// Append a clause, builder style
    pub fn with_clause(mut self, occur: Occur, query: IndexQuery) -> Self {
        self.push(occur, query);
        self
    }

    /// Append a required clause
    pub fn must(self, query: IndexQuery) -> Self {
        self.with_clause(Occur::Must, query)
    }

    /// Append a forbidden clause
    pub fn must_not(self, query: IndexQuery) -> Self {
        self.with_clause(Occur::MustNot, query)
    }

    /// Append an optional clause
    pub fn should(self, query: IndexQuery) -> Self {
        self.with_clause(Occur::Should, query)
    }

    /// Whether this query has no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of direct clauses
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}
