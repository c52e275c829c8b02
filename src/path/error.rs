//! Errors raised by path write and delete operations.

use crate::value::Kind;
use thiserror::Error;

/// PathError represents a failed precondition during a path write or
/// delete. Reads never raise; absence is reported as `None` or `false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The operation's target was not a container.
    #[error("target must be a container, got {actual}")]
    InvalidTarget { actual: Kind },

    /// An existing non-container blocked traversal. The path is fully
    /// reconstructed with the caller's separator and prefix.
    #[error("all parts of the path must be containers: non-container at {path}")]
    InvalidIntermediate { path: String },
}

impl PathError {
    /// Creates an invalid target error.
    pub fn invalid_target(actual: Kind) -> Self {
        PathError::InvalidTarget { actual }
    }

    /// Creates an invalid intermediate error.
    pub fn invalid_intermediate(path: impl Into<String>) -> Self {
        PathError::InvalidIntermediate { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_kind() {
        let err = PathError::invalid_target(Kind::String);
        assert_eq!(err.to_string(), "target must be a container, got string");
    }

    #[test]
    fn test_display_carries_full_path() {
        let err = PathError::invalid_intermediate("users.user1.username");
        assert!(err.to_string().ends_with("at users.user1.username"));
    }
}
