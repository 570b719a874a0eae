//! Range query - point range over a numeric field
//!
//! Bounds are always resolved and inclusive by the time a node is built: the
//! compiler folds exclusive and unbounded specification bounds into concrete
//! values, so the engine only ever sees closed intervals.

use serde::{Deserialize, Serialize};

/// Resolved, inclusive bounds in the engine's point-range domains
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumericBounds {
    /// Integer interval; also used for dates in epoch microseconds
    Long { min: i64, max: i64 },
    /// Floating-point interval; unbounded sides are infinities
    Double { min: f64, max: f64 },
}

/// Query matching documents whose field value falls inside the bounds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeQuery {
    /// Field to match against
    pub field: String,
    /// Resolved inclusive interval
    pub bounds: NumericBounds,
}

impl RangeQuery {
    /// Inclusive integer range
    pub fn long(field: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            field: field.into(),
            bounds: NumericBounds::Long { min, max },
        }
    }

    /// Inclusive floating-point range
    pub fn double(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            field: field.into(),
            bounds: NumericBounds::Double { min, max },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_range_creation() {
        let query = RangeQuery::long("count", 1, 10);
        assert_eq!(query.bounds, NumericBounds::Long { min: 1, max: 10 });
    }

    #[test]
    fn test_double_range_creation() {
        let query = RangeQuery::double("score", f64::NEG_INFINITY, 2.5);
        match query.bounds {
            NumericBounds::Double { min, max } => {
                assert!(min.is_infinite());
                assert_eq!(max, 2.5);
            }
            _ => panic!("expected double bounds"),
        }
    }
}
