//! Errors returned by mechanism construction and sampling.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MechanismError>;

/// Broad classification of a [`MechanismError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input had the wrong shape (only reachable from dynamically typed input).
    Type,
    /// An input had the right shape but an invalid value.
    Value,
    /// The operation is not defined for this mechanism.
    Unsupported,
    /// A configuration document could not be read.
    Config,
}

/// Errors raised by the exponential mechanisms.
#[derive(Debug, thiserror::Error)]
pub enum MechanismError {
    #[error("Epsilon must be non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("Delta must be in [0, 1] and zero for this mechanism, got {0}")]
    InvalidDelta(f64),

    #[error("Epsilon and Delta cannot both be zero")]
    ZeroBudget,

    #[error("Utility values must be non-negative (got {utility} for {value1:?}, {value2:?})")]
    NegativeUtility {
        value1: String,
        value2: String,
        utility: f64,
    },

    #[error("Utility values must be finite numbers (got {utility} for {value1:?}, {value2:?})")]
    NonFiniteUtility {
        value1: String,
        value2: String,
        utility: f64,
    },

    #[error("Utility values missing: {0:?}")]
    MissingUtilities(Vec<(String, String)>),

    #[error(
        "Leaves of the hierarchy must all be at the same level \
         (node {locator:?} is at level {depth} instead of hierarchy height {height})"
    )]
    UnevenHierarchy {
        locator: Vec<usize>,
        depth: usize,
        height: usize,
    },

    #[error("Leaf {0:?} appears more than once in the hierarchy")]
    DuplicateLeaf(String),

    #[error("Value {0:?} not in domain")]
    NotInDomain(String),

    #[error("{0}")]
    Type(String),

    #[error("{0} is not supported by the exponential mechanism")]
    Unsupported(&'static str),

    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MechanismError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MechanismError::Type(_) => ErrorKind::Type,
            MechanismError::Unsupported(_) => ErrorKind::Unsupported,
            MechanismError::Config(_) | MechanismError::Json(_) => ErrorKind::Config,
            _ => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_utilities_message_lists_pairs() {
        let err = MechanismError::MissingUtilities(vec![
            ("A".to_string(), "C".to_string()),
            ("B".to_string(), "D".to_string()),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("\"A\", \"C\""));
        assert!(msg.contains("\"B\", \"D\""));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(MechanismError::Type("x".into()).kind(), ErrorKind::Type);
        assert_eq!(MechanismError::Unsupported("bias").kind(), ErrorKind::Unsupported);
        assert_eq!(MechanismError::NotInDomain("x".into()).kind(), ErrorKind::Value);
    }
}
