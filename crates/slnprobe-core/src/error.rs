//! Unified error handling for Slnprobe Core.
//!
//! This module provides a unified error type that wraps application errors,
//! with a category classification the CLI maps onto exit codes.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Slnprobe Core operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ProbeError {
    /// Get error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input path could not be resolved to a project set.
    Input,
    /// Toolchain listing or selection failed.
    Toolchain,
    /// The evaluation engine failed outside the per-project boundary.
    Engine,
    /// Internal/system error.
    Internal,
}

/// Convenient result type alias.
pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn input_errors_categorized_as_input() {
        let err = ProbeError::from(ApplicationError::InputNotResolved {
            path: PathBuf::from("/missing"),
        });
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn internal_errors_mention_bug_report() {
        let err = ProbeError::Internal {
            message: "pool".into(),
        };
        assert!(err.to_string().contains("bug"));
    }
}
