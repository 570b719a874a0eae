use thiserror::Error;

/// Main error type for marlin query compilation
///
/// Every variant is a synchronous validation failure originating in this
/// crate; callers surface them to the requester as bad-request failures.
#[derive(Error, Debug)]
pub enum MarlinError {
    #[error("Invalid clause: {0}")]
    InvalidClause(String),

    #[error("Unsupported range type: {0}")]
    UnsupportedRangeType(String),

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("Invalid sort specification: {0}")]
    InvalidSortSpec(String),
}

/// Result type alias for marlin operations
pub type Result<T> = std::result::Result<T, MarlinError>;
