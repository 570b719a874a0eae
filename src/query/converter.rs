//! Compilation of specification clause trees into executable queries
//!
//! The converter walks the clause tree once, translating leaf terms through
//! the node builders and boolean groups through the recursive composer. Two
//! rewrites keep common patterns cheap on the engine side:
//!
//! - a disjunction of SHOULD equality clauses over one field, at or above
//!   the rewrite threshold, collapses into a single [`TermsQuery`];
//! - a prefix over the root path or a wildcard over `*` on the self-link
//!   field collapses into a match-all instead of scanning every indexed
//!   term.
//!
//! The input tree is never mutated; occurrence defaults are resolved locally
//! and the observed document kinds come back as part of the result, so one
//! specification may be shared across concurrent conversions.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::EngineLimits;
use crate::error::{MarlinError, Result};
use crate::query::ast::IndexQuery;
use crate::query::nodes::{
    BoolQuery, PhraseQuery, PrefixQuery, RangeQuery, TermQuery, TermsQuery, WildcardQuery,
};
use crate::schema::{self, PropertyType};
use crate::spec::{LeafMatch, NumericRange, Occurrence, QueryClause, QueryTerm, RangeValue};

/// Clause count at which an all-SHOULD same-field disjunction is considered
/// for the set-membership rewrite
pub const BOOLEAN_REWRITE_TERM_COUNT_THRESHOLD: usize = 16;

/// Result of one conversion
///
/// `kind_scope` holds every document kind referenced by a non-MUST_NOT
/// equality term on the kind field; callers use it to filter results
/// downstream. It lives only as long as this value.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedQuery {
    pub query: IndexQuery,
    pub kind_scope: BTreeSet<String>,
}

/// Compiles query specifications into the index engine's query tree
#[derive(Clone, Copy, Debug)]
pub struct QueryConverter {
    rewrite_threshold: usize,
}

impl Default for QueryConverter {
    fn default() -> Self {
        Self::new(EngineLimits::default())
    }
}

impl QueryConverter {
    /// Converter targeting an engine with the given limits
    pub fn new(limits: EngineLimits) -> Self {
        Self {
            rewrite_threshold: BOOLEAN_REWRITE_TERM_COUNT_THRESHOLD.min(limits.max_clause_count),
        }
    }

    /// Convert a specification clause tree into an executable query
    ///
    /// A boolean root is wrapped in a single-clause container carrying the
    /// root's own occurrence, which would otherwise be lost; leaf roots carry
    /// their occurrence implicitly.
    pub fn convert(&self, clause: &QueryClause) -> Result<ConvertedQuery> {
        let mut kind_scope = BTreeSet::new();
        let query = if clause.boolean_clauses.is_some() {
            if clause.term.is_some() {
                return Err(MarlinError::InvalidClause(
                    "term and booleanClauses are mutually exclusive".to_string(),
                ));
            }
            let inner = self.convert_clause(clause, &mut kind_scope)?;
            IndexQuery::Bool(BoolQuery::new().with_clause(clause.effective_occurrence().into(), inner))
        } else {
            self.convert_clause(clause, &mut kind_scope)?
        };
        Ok(ConvertedQuery { query, kind_scope })
    }

    fn convert_clause(
        &self,
        clause: &QueryClause,
        kind_scope: &mut BTreeSet<String>,
    ) -> Result<IndexQuery> {
        match (&clause.term, &clause.boolean_clauses) {
            (Some(_), Some(_)) => Err(MarlinError::InvalidClause(
                "term and booleanClauses are mutually exclusive".to_string(),
            )),
            (None, None) => Err(MarlinError::InvalidClause(
                "one of term, booleanClauses must be provided".to_string(),
            )),
            (None, Some(children)) => self.convert_boolean(children, kind_scope),
            (Some(term), None) => {
                Self::convert_term(clause.effective_occurrence(), term, kind_scope)
            }
        }
    }

    fn convert_term(
        occurrence: Occurrence,
        term: &QueryTerm,
        kind_scope: &mut BTreeSet<String>,
    ) -> Result<IndexQuery> {
        let leaf = term.leaf()?;

        if occurrence != Occurrence::MustNot && term.property_name == schema::FIELD_NAME_KIND {
            if let Some(kind) = &term.match_value {
                kind_scope.insert(kind.clone());
            }
        }

        Ok(match leaf {
            LeafMatch::Term(value) => IndexQuery::Term(TermQuery::new(&term.property_name, value)),
            LeafMatch::Prefix(value) => Self::convert_prefix(&term.property_name, value),
            LeafMatch::Wildcard(value) => Self::convert_wildcard(&term.property_name, value),
            LeafMatch::Phrase(value) => {
                IndexQuery::Phrase(PhraseQuery::tokenize(&term.property_name, value))
            }
            LeafMatch::Range(range) => Self::convert_range(&term.property_name, range)?,
        })
    }

    /// A prefix over the root path matches every document; scanning the term
    /// dictionary for it would visit one term per document
    fn convert_prefix(field: &str, prefix: &str) -> IndexQuery {
        if field == schema::FIELD_NAME_SELF_LINK && prefix == schema::ROOT_PATH {
            debug!(field, "root-path prefix collapsed to match-all");
            return IndexQuery::MatchAll;
        }
        IndexQuery::Prefix(PrefixQuery::new(field, prefix))
    }

    /// Same short-circuit as prefix for the universal wildcard on self links
    fn convert_wildcard(field: &str, pattern: &str) -> IndexQuery {
        if field == schema::FIELD_NAME_SELF_LINK && pattern == schema::WILDCARD_ANY {
            debug!(field, "universal wildcard collapsed to match-all");
            return IndexQuery::MatchAll;
        }
        IndexQuery::Wildcard(WildcardQuery::new(field, pattern))
    }

    fn convert_range(field: &str, range: &NumericRange) -> Result<IndexQuery> {
        range.validate()?;
        match range.range_type {
            PropertyType::Long | PropertyType::Date => Self::convert_long_range(field, range),
            PropertyType::Double => Ok(Self::convert_double_range(field, range)),
            other => Err(MarlinError::UnsupportedRangeType(other.to_string())),
        }
    }

    fn convert_long_range(field: &str, range: &NumericRange) -> Result<IndexQuery> {
        let mut min = resolved_long(range.min, i64::MIN);
        let mut max = resolved_long(range.max, i64::MAX);
        if !range.is_min_inclusive {
            min = min.checked_add(1).ok_or_else(|| {
                MarlinError::ArithmeticOverflow(format!(
                    "exclusive lower bound {min} on {field} cannot be incremented"
                ))
            })?;
        }
        if !range.is_max_inclusive {
            max = max.checked_sub(1).ok_or_else(|| {
                MarlinError::ArithmeticOverflow(format!(
                    "exclusive upper bound {max} on {field} cannot be decremented"
                ))
            })?;
        }
        Ok(IndexQuery::Range(RangeQuery::long(field, min, max)))
    }

    fn convert_double_range(field: &str, range: &NumericRange) -> IndexQuery {
        let mut min = range
            .min
            .map(|v| v.as_f64())
            .unwrap_or(f64::NEG_INFINITY);
        let mut max = range.max.map(|v| v.as_f64()).unwrap_or(f64::INFINITY);
        if !range.is_min_inclusive {
            min = min.next_up();
        }
        if !range.is_max_inclusive {
            max = max.next_down();
        }
        IndexQuery::Range(RangeQuery::double(field, min, max))
    }

    fn convert_boolean(
        &self,
        children: &[QueryClause],
        kind_scope: &mut BTreeSet<String>,
    ) -> Result<IndexQuery> {
        if children.len() >= self.rewrite_threshold {
            if let Some(terms) = Self::try_set_membership(children) {
                debug!(
                    field = %terms.field,
                    values = terms.len(),
                    "rewrote disjunction into set-membership query"
                );
                return Ok(IndexQuery::Terms(terms));
            }
        }

        // Arbitrary nesting and grouping; each child wraps with its own occurrence.
        let mut parent = BoolQuery::new();
        for child in children {
            let query = self.convert_clause(child, kind_scope)?;
            parent.push(child.effective_occurrence().into(), query);
        }
        Ok(IndexQuery::Bool(parent))
    }

    /// An all-SHOULD disjunction of equality terms over a single field is
    /// behaviorally equivalent to one set-membership lookup. The first child
    /// establishes the field; any nested boolean, non-SHOULD occurrence,
    /// missing match value, or differing field disqualifies the rewrite.
    fn try_set_membership(children: &[QueryClause]) -> Option<TermsQuery> {
        let mut field: Option<&str> = None;
        let mut values = Vec::with_capacity(children.len());
        for child in children {
            let term = child.term.as_ref()?;
            if child.boolean_clauses.is_some()
                || child.effective_occurrence() != Occurrence::Should
            {
                return None;
            }
            let value = term.match_value.as_deref()?;
            match field {
                Some(key) if key != term.property_name => return None,
                _ => field = Some(&term.property_name),
            }
            values.push(value.to_string());
        }
        Some(TermsQuery::new(field?, values))
    }
}

fn resolved_long(bound: Option<RangeValue>, unbounded: i64) -> i64 {
    bound.and_then(|v| v.as_i64()).unwrap_or(unbounded)
}
