use std::fmt;

use crate::domain::Domain;

/// Verdict emitted for a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Query equals or is nested under a block-list entry
    Bad,
    /// Query is allowed
    Good,
}

impl Verdict {
    /// Map a forbidden flag to a verdict
    pub fn from_forbidden(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Verdict::Bad)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Bad => f.write_str("Bad"),
            Verdict::Good => f.write_str("Good"),
        }
    }
}

/// Parsed batch input
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// Block-list entries, in input order
    pub forbidden: Vec<Domain>,
    /// Query domains, in input order
    pub queries: Vec<Domain>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Bad.to_string(), "Bad");
        assert_eq!(Verdict::Good.to_string(), "Good");
    }

    #[test]
    fn test_from_forbidden() {
        assert_eq!(Verdict::from_forbidden(true), Verdict::Bad);
        assert_eq!(Verdict::from_forbidden(false), Verdict::Good);
        assert!(Verdict::Bad.is_bad());
        assert!(!Verdict::Good.is_bad());
    }
}
