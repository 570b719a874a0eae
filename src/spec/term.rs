//! Leaf match descriptors: terms, match types, and numeric ranges

use serde::{Deserialize, Serialize};

use crate::error::{MarlinError, Result};
use crate::schema::PropertyType;

use super::specification::SortOrder;

/// How a leaf term matches its property
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    #[default]
    Term,
    Wildcard,
    Prefix,
    Phrase,
}

/// A single numeric range bound
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// 64-bit integer, also used for dates in epoch microseconds
    Long(i64),
    /// 64-bit floating point
    Double(f64),
}

impl RangeValue {
    /// The bound as an integer; `None` for floating-point values
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RangeValue::Long(v) => Some(*v),
            RangeValue::Double(_) => None,
        }
    }

    /// The bound as a float; integers are widened
    pub fn as_f64(&self) -> f64 {
        match self {
            RangeValue::Long(v) => *v as f64,
            RangeValue::Double(v) => *v,
        }
    }
}

/// Inclusive/exclusive numeric range over a property
///
/// An absent bound means unbounded on that side; at least one bound must be
/// present. The declared type selects the translation rule: `LONG` and
/// `DATE` share the integer path, `DOUBLE` uses the floating-point path, and
/// everything else has no rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericRange {
    #[serde(rename = "type")]
    pub range_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<RangeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<RangeValue>,
    #[serde(default)]
    pub is_min_inclusive: bool,
    #[serde(default)]
    pub is_max_inclusive: bool,
}

impl NumericRange {
    /// Integer range; `None` bounds are unbounded
    pub fn long(
        min: Option<i64>,
        max: Option<i64>,
        is_min_inclusive: bool,
        is_max_inclusive: bool,
    ) -> Self {
        Self {
            range_type: PropertyType::Long,
            min: min.map(RangeValue::Long),
            max: max.map(RangeValue::Long),
            is_min_inclusive,
            is_max_inclusive,
        }
    }

    /// Floating-point range; `None` bounds are unbounded
    pub fn double(
        min: Option<f64>,
        max: Option<f64>,
        is_min_inclusive: bool,
        is_max_inclusive: bool,
    ) -> Self {
        Self {
            range_type: PropertyType::Double,
            min: min.map(RangeValue::Double),
            max: max.map(RangeValue::Double),
            is_min_inclusive,
            is_max_inclusive,
        }
    }

    /// Date range in epoch microseconds
    pub fn date(
        min: Option<i64>,
        max: Option<i64>,
        is_min_inclusive: bool,
        is_max_inclusive: bool,
    ) -> Self {
        Self {
            range_type: PropertyType::Date,
            ..Self::long(min, max, is_min_inclusive, is_max_inclusive)
        }
    }

    /// At least one bound must be present, and each present bound must carry
    /// the declared numeric type. Integer bounds widen for `DOUBLE` ranges;
    /// floating-point bounds are rejected for `LONG`/`DATE` ranges.
    pub fn validate(&self) -> Result<()> {
        if self.min.is_none() && self.max.is_none() {
            return Err(MarlinError::InvalidClause(
                "range requires at least one of min, max".to_string(),
            ));
        }
        if matches!(self.range_type, PropertyType::Long | PropertyType::Date) {
            for (name, bound) in [("min", self.min), ("max", self.max)] {
                if let Some(value) = bound {
                    if value.as_i64().is_none() {
                        return Err(MarlinError::InvalidClause(format!(
                            "range.{name} must be an integer for {} ranges",
                            self.range_type
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Leaf kinds a term resolves to, dispatched exhaustively by the compiler
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LeafMatch<'a> {
    Term(&'a str),
    Wildcard(&'a str),
    Prefix(&'a str),
    Phrase(&'a str),
    Range(&'a NumericRange),
}

/// Leaf match descriptor
///
/// Exactly one of `match_value` / `range` must be set. `property_type` and
/// `sort_order` are only consulted when the term is used as a sort term.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTerm {
    pub property_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<NumericRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl QueryTerm {
    /// Equality match on a property
    pub fn matching(property_name: impl Into<String>, match_value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            match_value: Some(match_value.into()),
            ..Self::default()
        }
    }

    /// Range match on a property
    pub fn ranged(property_name: impl Into<String>, range: NumericRange) -> Self {
        Self {
            property_name: property_name.into(),
            range: Some(range),
            ..Self::default()
        }
    }

    /// Sort term with its declared property type
    pub fn sorting(property_name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            property_name: property_name.into(),
            property_type: Some(property_type),
            ..Self::default()
        }
    }

    /// Set the match type
    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = Some(match_type);
        self
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Precondition checks for a match term
    pub fn validate(&self) -> Result<()> {
        if self.range.is_none() && self.match_value.is_none() {
            return Err(MarlinError::InvalidClause(
                "one of term.matchValue, term.range is required".to_string(),
            ));
        }
        if self.range.is_some() && self.match_value.is_some() {
            return Err(MarlinError::InvalidClause(
                "term.matchValue and term.range are exclusive of each other".to_string(),
            ));
        }
        if self.property_name.is_empty() {
            return Err(MarlinError::InvalidClause(
                "term.propertyName is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Precondition checks for a sort term
    pub fn validate_sort(&self) -> Result<()> {
        if self.property_type.is_none() {
            return Err(MarlinError::InvalidClause(
                "term.propertyType is required".to_string(),
            ));
        }
        if self.property_name.is_empty() {
            return Err(MarlinError::InvalidClause(
                "term.propertyName is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate the term and resolve its leaf kind
    ///
    /// A range always wins the dispatch; otherwise the match type (defaulting
    /// to an exact term match) selects the kind.
    pub fn leaf(&self) -> Result<LeafMatch<'_>> {
        self.validate()?;
        if let Some(range) = &self.range {
            return Ok(LeafMatch::Range(range));
        }
        let value = match self.match_value.as_deref() {
            Some(value) => value,
            None => {
                return Err(MarlinError::InvalidClause(
                    "one of term.matchValue, term.range is required".to_string(),
                ))
            }
        };
        Ok(match self.match_type.unwrap_or_default() {
            MatchType::Term => LeafMatch::Term(value),
            MatchType::Wildcard => LeafMatch::Wildcard(value),
            MatchType::Prefix => LeafMatch::Prefix(value),
            MatchType::Phrase => LeafMatch::Phrase(value),
        })
    }
}
