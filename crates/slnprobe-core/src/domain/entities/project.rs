//! The evaluated result for one project.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::capabilities::EvaluatedProject;

/// Per-project build metadata extracted from one engine evaluation.
///
/// A record exists only for projects that evaluated without error; failures
/// never become records. Path-valued properties are carried as the engine
/// reported them except where documented on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    pub path: PathBuf,
    /// Resolved output assembly path; empty when evaluation yields no value.
    pub target_path: PathBuf,
    /// Raw output-type string in the engine's vocabulary.
    pub output_type: String,
    /// Absolute path to the optional external preview host; empty when the
    /// project does not define one.
    pub designer_host_path: PathBuf,
    /// Raw target-framework moniker.
    pub target_framework: String,
    pub deps_file_path: PathBuf,
    pub runtime_config_file_path: PathBuf,
    /// Absolute paths to referenced projects, resolved against this
    /// project's own directory. Order-preserving, duplicates allowed.
    pub project_references: Vec<PathBuf>,
    /// Computed reference-cache directory (see `domain::paths`).
    pub intermediate_output_path: PathBuf,
    /// Retained evaluated state for markup re-querying. Never serialized;
    /// absent after deserialization.
    #[serde(skip)]
    pub evaluated: Option<Arc<dyn EvaluatedProject>>,
}

// The retained handle is identity-free scratch state; equality is over the
// serializable metadata only.
impl PartialEq for ProjectRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.path == other.path
            && self.target_path == other.target_path
            && self.output_type == other.output_type
            && self.designer_host_path == other.designer_host_path
            && self.target_framework == other.target_framework
            && self.deps_file_path == other.deps_file_path
            && self.runtime_config_file_path == other.runtime_config_file_path
            && self.project_references == other.project_references
            && self.intermediate_output_path == other.intermediate_output_path
    }
}
