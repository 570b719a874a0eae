use serde::{Deserialize, Serialize};

/// Limits of the target index engine that constrain query compilation
///
/// The compiler never talks to the engine directly; it only needs to know
/// how large a boolean query the engine will accept.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EngineLimits {
    /// Maximum number of clauses the engine accepts in a boolean query
    pub max_clause_count: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_clause_count: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = EngineLimits::default();
        assert_eq!(limits.max_clause_count, 1024);
    }
}
