//! Full query specification: a clause tree plus sort and paging options

use serde::{Deserialize, Serialize};

use super::clause::QueryClause;
use super::term::QueryTerm;

/// Sort direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Options modifying how the surrounding framework runs a query
///
/// Only `TOP_RESULTS` affects compilation; the rest travel with the
/// specification for downstream stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryOption {
    Count,
    GroupBy,
    Sort,
    TopResults,
}

/// A complete query specification as received from the framework
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpecification {
    pub query: QueryClause,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QueryOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_term: Option<QueryTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_sort_terms: Option<Vec<QueryTerm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_sort_term: Option<QueryTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_group_sort_terms: Option<Vec<QueryTerm>>,
}

impl QuerySpecification {
    /// Specification holding only a clause tree
    pub fn new(query: QueryClause) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Whether the given option is requested
    pub fn has_option(&self, option: QueryOption) -> bool {
        self.options.contains(&option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PropertyType;

    #[test]
    fn test_new_carries_only_the_clause_tree() {
        let clause = QueryClause::term(QueryTerm::matching("status", "active"));
        let spec = QuerySpecification::new(clause.clone());
        assert_eq!(spec.query, clause);
        assert!(spec.options.is_empty());
        assert!(spec.sort_term.is_none());
    }

    #[test]
    fn test_has_option() {
        let mut spec = QuerySpecification::new(QueryClause::default());
        assert!(!spec.has_option(QueryOption::TopResults));
        spec.options.push(QueryOption::TopResults);
        assert!(spec.has_option(QueryOption::TopResults));
    }

    #[test]
    fn test_sort_order_default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }

    #[test]
    fn test_specification_wire_names() {
        let mut spec = QuerySpecification::default();
        spec.sort_term = Some(QueryTerm::sorting("name", PropertyType::String));
        spec.options = vec![QueryOption::Sort, QueryOption::TopResults];
        spec.result_limit = Some(50);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["sortTerm"]["propertyName"], "name");
        assert_eq!(json["resultLimit"], 50);
        assert_eq!(json["options"][1], "TOP_RESULTS");
    }
}
