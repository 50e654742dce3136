//! Core domain layer for slnprobe.
//!
//! Pure data and path logic. All subprocess, solution-grammar, and
//! evaluation-engine concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, process, or environment access
//! - **Immutable entities**: records are built once and never mutated
//! - **Raw engine vocabulary**: property values are carried verbatim, never
//!   reinterpreted

pub mod capabilities;
pub mod entities;
pub mod paths;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::EvaluatedProject;
pub use entities::{
    project::ProjectRecord,
    sdk::{SdkInstall, ToolchainContext},
    snapshot::{MarkupFileRecord, Snapshot},
    solution::{ProjectReference, SolutionEntry},
};
