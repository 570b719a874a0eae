//! Engine-agnostic query specification model
//!
//! A specification is a tree of [`QueryClause`] values: each node is either a
//! leaf [`QueryTerm`] match or an ordered group of child clauses, every node
//! carrying an [`Occurrence`]. The model is a wire format; all types
//! round-trip through serde with the framework's JSON field names.

pub mod clause;
pub mod specification;
pub mod term;

pub use clause::{Occurrence, QueryClause};
pub use specification::{QueryOption, QuerySpecification, SortOrder};
pub use term::{LeafMatch, MatchType, NumericRange, QueryTerm, RangeValue};
