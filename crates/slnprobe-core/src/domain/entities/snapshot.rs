//! The root output document and its derived file records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::project::ProjectRecord;

/// One markup source file mapped to its owning project's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupFileRecord {
    /// Absolute path to the markup source file.
    pub source_path: PathBuf,
    /// The owning project's output assembly path.
    pub target_path: PathBuf,
    /// The owning project's project-file path.
    pub project_path: PathBuf,
}

/// The aggregate result of one run. Built once after aggregation completes,
/// immutable, written exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub solution: PathBuf,
    pub projects: Vec<ProjectRecord>,
    pub files: Vec<MarkupFileRecord>,
}

impl Snapshot {
    pub fn new(
        solution: impl Into<PathBuf>,
        projects: Vec<ProjectRecord>,
        files: Vec<MarkupFileRecord>,
    ) -> Self {
        Self {
            solution: solution.into(),
            projects,
            files,
        }
    }

    /// Render the document exactly as it is persisted and echoed to stdout.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
