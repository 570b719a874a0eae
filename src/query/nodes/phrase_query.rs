//! Phrase query - matches an ordered sequence of tokens
//!
//! The compiler tokenizes the raw phrase on non-word boundaries. Phrase
//! queries are a rare path; a real analyzer would be needed for
//! language-aware tokenization.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"\W").expect("static pattern is valid"))
}

/// Query matching documents containing the tokens in order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhraseQuery {
    /// Field to match against
    pub field: String,
    /// Tokens that must appear in this order
    pub terms: Vec<String>,
}

impl PhraseQuery {
    /// Create a phrase query from pre-tokenized terms
    pub fn new(field: impl Into<String>, terms: Vec<String>) -> Self {
        Self {
            field: field.into(),
            terms,
        }
    }

    /// Create a phrase query by splitting a raw phrase on non-word characters
    ///
    /// Empty tokens produced by leading or trailing delimiters are kept; the
    /// engine treats them as (never-matching) empty terms.
    pub fn tokenize(field: impl Into<String>, phrase: &str) -> Self {
        let terms = non_word().split(phrase).map(str::to_string).collect();
        Self::new(field, terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_non_word() {
        let query = PhraseQuery::tokenize("content", "rust-based search engine");
        assert_eq!(query.terms, vec!["rust", "based", "search", "engine"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores() {
        let query = PhraseQuery::tokenize("content", "snake_case token");
        assert_eq!(query.terms, vec!["snake_case", "token"]);
    }

    #[test]
    fn test_tokenize_keeps_empty_tokens_at_edges() {
        let query = PhraseQuery::tokenize("content", "-leading trailing-");
        assert_eq!(query.terms, vec!["", "leading", "trailing", ""]);
    }

    #[test]
    fn test_tokenize_empty_phrase() {
        let query = PhraseQuery::tokenize("content", "");
        assert_eq!(query.terms, vec![""]);
    }
}
