//! marlin - declarative boolean query compilation for a document search index
//!
//! This crate translates an engine-agnostic query specification (nested
//! clauses of term, prefix, wildcard, phrase, and numeric range matches with
//! MUST/MUST_NOT/SHOULD occurrence semantics) into the executable query tree
//! and sort specification of the underlying index engine. It performs no
//! index I/O; both entry points are synchronous pure transforms:
//!
//! - [`QueryConverter::convert`] compiles a clause tree into an
//!   [`IndexQuery`] plus the set of document kinds the query references;
//! - [`build_sort`] compiles a specification's sort terms into an
//!   [`IndexSort`].

pub mod config;
pub mod error;
pub mod query;
pub mod schema;
pub mod spec;

pub use config::EngineLimits;
pub use error::{MarlinError, Result};
pub use query::{build_sort, ConvertedQuery, IndexQuery, IndexSort, QueryConverter, SortField};
pub use spec::{
    MatchType, NumericRange, Occurrence, QueryClause, QueryOption, QuerySpecification, QueryTerm,
    RangeValue, SortOrder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
