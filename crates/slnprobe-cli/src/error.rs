//! Comprehensive error handling for the slnprobe CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use slnprobe_core::error::{ErrorCategory as CoreCategory, ProbeError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `slnprobe-core` or an adapter.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the core
    /// error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] ProbeError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Rendering the snapshot document failed.
    #[error("Snapshot serialization failed: {source}")]
    SnapshotRender {
        #[source]
        source: serde_json::Error,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Input => vec![
                    "Pass a .sln file or a directory containing project files".into(),
                    "Check that the path exists and is readable".into(),
                ],
                CoreCategory::Toolchain => vec![
                    "Check that the toolchain is installed: dotnet --list-sdks".into(),
                    "Relax the version selector, or pass --include-prerelease".into(),
                ],
                CoreCategory::Engine => vec![
                    "Re-run with -v to see the engine invocation".into(),
                ],
                CoreCategory::Internal => vec!["Re-run with -vv for diagnostics".into()],
            },
            Self::SnapshotRender { .. } => {
                vec!["This is likely a bug in slnprobe, please report it".into()]
            }
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Input => ErrorCategory::InputError,
                CoreCategory::Toolchain => ErrorCategory::Toolchain,
                CoreCategory::Engine | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::SnapshotRender { .. } => ErrorCategory::Internal,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category   | Code |
    /// |------------|------|
    /// | Input      |  1   |
    /// | Toolchain  |  3   |
    /// | Internal   |  4   |
    ///
    /// (Exit 2 is argument-parse failure, produced directly in `main`.)
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::InputError => 1,
            ErrorCategory::Toolchain => 3,
            ErrorCategory::Internal => 4,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "✗".red().bold(),
            self.to_string().red()
        ));

        if let Some(source) = self.source() {
            output.push_str(&format!("  {} {}\n", "→".dimmed(), source.to_string().dimmed()));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if let Some(source) = self.source() {
            out.push_str(&format!("  Caused by: {source}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::InputError => tracing::warn!("Input error: {}", self),
            ErrorCategory::Toolchain => tracing::error!("Toolchain error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input path could not be resolved (exit 1, spec-mandated).
    InputError,
    /// Toolchain listing/selection failure (exit 3).
    Toolchain,
    /// Internal/system error (exit 4).
    Internal,
}
