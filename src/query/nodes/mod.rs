//! Query node types understood by the index engine

pub mod bool_query;
pub mod phrase_query;
pub mod prefix_query;
pub mod range_query;
pub mod term_query;
pub mod terms_query;
pub mod wildcard_query;

pub use bool_query::{BoolQuery, BooleanClause, Occur};
pub use phrase_query::PhraseQuery;
pub use prefix_query::PrefixQuery;
pub use range_query::{NumericBounds, RangeQuery};
pub use term_query::TermQuery;
pub use terms_query::TermsQuery;
pub use wildcard_query::WildcardQuery;
