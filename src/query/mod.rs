//! Executable query tree and the compilers that produce it
//!
//! This module owns both sides of the translation:
//! - [`ast`] and [`nodes`] define the query tree the index engine executes;
//! - [`converter`] compiles a specification clause tree into that form;
//! - [`sort`] compiles the specification's sort terms into native sort fields.

pub mod ast;
pub mod converter;
pub mod nodes;
pub mod sort;

pub use ast::IndexQuery;
pub use converter::{ConvertedQuery, QueryConverter, BOOLEAN_REWRITE_TERM_COUNT_THRESHOLD};
pub use nodes::{
    BoolQuery, BooleanClause, Occur, PhraseQuery, PrefixQuery, RangeQuery, TermQuery, TermsQuery,
    WildcardQuery,
};
pub use sort::{build_sort, IndexSort, NumericKind, SortField};
