//! Compilation of sort terms into native sort fields
//!
//! A specification carries one primary sort term plus optional additional
//! terms, in two sets: the normal result sort and the grouped-result sort.
//! Numeric properties sort on the raw field through the engine's
//! multi-valued numeric sort; everything else sorts lexicographically on the
//! index's derived sort field.

use serde::{Deserialize, Serialize};

use crate::error::{MarlinError, Result};
use crate::schema::{self, PropertyType};
use crate::spec::{QueryOption, QuerySpecification, QueryTerm, SortOrder};

/// Width of a numeric sort key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    Long,
    Double,
}

/// One native sort field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SortField {
    /// Multi-value aware numeric sort on the raw property name
    Numeric {
        field: String,
        numeric: NumericKind,
        descending: bool,
    },
    /// Lexicographic sort on the index's derived sort field
    Lexical { field: String, descending: bool },
}

/// Ordered sort specification, primary field first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSort {
    pub fields: Vec<SortField>,
}

/// Build the native sort specification for a query
///
/// `is_group_sort` selects the grouped-result sort term set. The declared
/// order defaults to ascending and applies to the primary term; additional
/// terms carry their own order, also defaulting to ascending. The input
/// specification is not mutated.
pub fn build_sort(spec: &QuerySpecification, is_group_sort: bool) -> Result<IndexSort> {
    if spec.has_option(QueryOption::TopResults) {
        let limit = spec.result_limit.unwrap_or(0);
        if limit <= 0 || limit == i32::MAX {
            return Err(MarlinError::InvalidSortSpec(format!(
                "resultLimit {limit} should be a positive integer less than {}",
                i32::MAX
            )));
        }
    }

    let (sort_term, declared_order, additional) = if is_group_sort {
        (
            spec.group_sort_term.as_ref(),
            spec.group_sort_order,
            spec.additional_group_sort_terms.as_deref(),
        )
    } else {
        (
            spec.sort_term.as_ref(),
            spec.sort_order,
            spec.additional_sort_terms.as_deref(),
        )
    };

    let sort_term = sort_term.ok_or_else(|| {
        let name = if is_group_sort {
            "groupSortTerm"
        } else {
            "sortTerm"
        };
        MarlinError::InvalidSortSpec(format!("{name} is required"))
    })?;

    let additional = additional.unwrap_or_default();
    let mut fields = Vec::with_capacity(additional.len() + 1);
    // The spec-level order overrides whatever the primary term declares.
    fields.push(build_sort_field(sort_term, declared_order.or(Some(SortOrder::Asc)))?);
    for term in additional {
        fields.push(build_sort_field(term, None)?);
    }
    Ok(IndexSort { fields })
}

fn build_sort_field(term: &QueryTerm, order_override: Option<SortOrder>) -> Result<SortField> {
    term.validate_sort()?;
    let order = order_override.or(term.sort_order).unwrap_or_default();
    let descending = order == SortOrder::Desc;

    Ok(match term.property_type {
        Some(PropertyType::Long) => SortField::Numeric {
            field: term.property_name.clone(),
            numeric: NumericKind::Long,
            descending,
        },
        Some(PropertyType::Double) => SortField::Numeric {
            field: term.property_name.clone(),
            numeric: NumericKind::Double,
            descending,
        },
        _ => SortField::Lexical {
            field: schema::sort_field_name(&term.property_name),
            descending,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with_sort(term: QueryTerm) -> QuerySpecification {
        QuerySpecification {
            sort_term: Some(term),
            ..QuerySpecification::default()
        }
    }

    #[test]
    fn test_string_sort_uses_derived_field() {
        let spec = spec_with_sort(QueryTerm::sorting("name", PropertyType::String));
        let sort = build_sort(&spec, false).unwrap();
        assert_eq!(
            sort.fields,
            vec![SortField::Lexical {
                field: "name_sort".to_string(),
                descending: false,
            }]
        );
    }

    #[test]
    fn test_numeric_sort_uses_raw_field() {
        let spec = spec_with_sort(QueryTerm::sorting("count", PropertyType::Long));
        let sort = build_sort(&spec, false).unwrap();
        assert_eq!(
            sort.fields,
            vec![SortField::Numeric {
                field: "count".to_string(),
                numeric: NumericKind::Long,
                descending: false,
            }]
        );
    }

    #[test]
    fn test_date_sorts_lexicographically() {
        let spec = spec_with_sort(QueryTerm::sorting("created", PropertyType::Date));
        let sort = build_sort(&spec, false).unwrap();
        assert!(matches!(sort.fields[0], SortField::Lexical { .. }));
    }

    #[test]
    fn test_missing_order_defaults_to_ascending() {
        let spec = spec_with_sort(QueryTerm::sorting("name", PropertyType::String));
        let sort = build_sort(&spec, false).unwrap();
        match &sort.fields[0] {
            SortField::Lexical { descending, .. } => assert!(!descending),
            other => panic!("unexpected sort field {other:?}"),
        }
    }

    #[test]
    fn test_spec_order_overrides_term_order() {
        let mut spec = spec_with_sort(
            QueryTerm::sorting("count", PropertyType::Long).with_sort_order(SortOrder::Asc),
        );
        spec.sort_order = Some(SortOrder::Desc);
        let sort = build_sort(&spec, false).unwrap();
        match &sort.fields[0] {
            SortField::Numeric { descending, .. } => assert!(descending),
            other => panic!("unexpected sort field {other:?}"),
        }
    }

    #[test]
    fn test_additional_terms_follow_primary_in_order() {
        let mut spec = spec_with_sort(QueryTerm::sorting("name", PropertyType::String));
        spec.additional_sort_terms = Some(vec![
            QueryTerm::sorting("count", PropertyType::Long).with_sort_order(SortOrder::Desc),
            QueryTerm::sorting("created", PropertyType::Date),
        ]);
        let sort = build_sort(&spec, false).unwrap();
        assert_eq!(sort.fields.len(), 3);
        assert_eq!(
            sort.fields[1],
            SortField::Numeric {
                field: "count".to_string(),
                numeric: NumericKind::Long,
                descending: true,
            }
        );
        assert!(matches!(sort.fields[2], SortField::Lexical { .. }));
    }

    #[test]
    fn test_group_sort_uses_group_terms() {
        let mut spec = QuerySpecification::default();
        spec.group_sort_term = Some(QueryTerm::sorting("region", PropertyType::String));
        spec.group_sort_order = Some(SortOrder::Desc);
        let sort = build_sort(&spec, true).unwrap();
        match &sort.fields[0] {
            SortField::Lexical { field, descending } => {
                assert_eq!(field, "region_sort");
                assert!(descending);
            }
            other => panic!("unexpected sort field {other:?}"),
        }
        assert!(build_sort(&spec, false).is_err());
    }

    #[test]
    fn test_top_results_requires_valid_limit() {
        let mut spec = spec_with_sort(QueryTerm::sorting("name", PropertyType::String));
        spec.options = vec![QueryOption::TopResults];

        let err = build_sort(&spec, false).unwrap_err();
        assert!(matches!(err, MarlinError::InvalidSortSpec(_)));

        spec.result_limit = Some(i32::MAX);
        assert!(build_sort(&spec, false).is_err());

        spec.result_limit = Some(100);
        assert!(build_sort(&spec, false).is_ok());
    }

    #[test]
    fn test_sort_term_missing_property_type_fails() {
        let spec = spec_with_sort(QueryTerm::matching("name", "ignored"));
        let err = build_sort(&spec, false).unwrap_err();
        assert!(matches!(err, MarlinError::InvalidClause(_)));
    }

    #[test]
    fn test_build_sort_does_not_mutate_spec() {
        let spec = spec_with_sort(QueryTerm::sorting("name", PropertyType::String));
        let before = spec.clone();
        let _ = build_sort(&spec, false).unwrap();
        assert_eq!(spec, before);
        assert!(spec.sort_order.is_none());
    }
}
