//! Application layer errors.
//!
//! [`ApplicationError`] covers fatal orchestration failures. A single
//! project's evaluation failure is *not* one of them: that is an
//! [`EvalError`], surfaced at the evaluator's boundary so the aggregator can
//! log and drop it without aborting the batch.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Fatal errors during orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The SDK-listing process could not be started or read.
    #[error("SDK listing failed: {reason}")]
    ListingUnavailable { reason: String },

    /// The SDK-listing process did not exit within the wait deadline.
    #[error("SDK listing did not exit within {waited_ms} ms")]
    ListingTimedOut { waited_ms: u64 },

    /// No installed SDK matched the selection criteria.
    #[error("no matching SDK found{}", .requested.as_deref().map(|v| format!(" for version '{v}'")).unwrap_or_default())]
    NoMatchingSdk { requested: Option<String> },

    /// The input path is neither a directory nor an existing solution file.
    #[error("cannot resolve '{}' to a project set", .path.display())]
    InputNotResolved { path: PathBuf },

    /// The solution file could not be parsed by the grammar collaborator.
    #[error("cannot read solution '{}': {reason}", .path.display())]
    SolutionUnreadable { path: PathBuf, reason: String },

    /// The evaluation engine failed for one project. Converted into an
    /// [`EvalError`] at the evaluator boundary; fatal only if constructed
    /// outside it.
    #[error("engine failed for '{}': {reason}", .project.display())]
    EngineFailure { project: PathBuf, reason: String },

    /// Writing the snapshot document failed.
    #[error("cannot write snapshot to '{}': {reason}", .path.display())]
    SnapshotWrite { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Error category for exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ListingUnavailable { .. }
            | Self::ListingTimedOut { .. }
            | Self::NoMatchingSdk { .. } => ErrorCategory::Toolchain,
            Self::InputNotResolved { .. } | Self::SolutionUnreadable { .. } => {
                ErrorCategory::Input
            }
            Self::EngineFailure { .. } => ErrorCategory::Engine,
            Self::SnapshotWrite { .. } => ErrorCategory::Internal,
        }
    }
}

/// A single project's evaluation failure: logged, dropped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{project}: {reason}")]
pub struct EvalError {
    /// Name of the project that failed to evaluate.
    pub project: String,
    /// Engine-reported message.
    pub reason: String,
}
