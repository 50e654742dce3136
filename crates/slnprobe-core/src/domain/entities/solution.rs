//! Solution entries and the project references derived from them.

use std::path::PathBuf;

use crate::domain::value_objects::{PROJECT_EXTENSIONS, SOLUTION_FOLDER_TYPE_ID};

/// One project entry of a solution file, as reported by the grammar
/// collaborator. Declaration order is preserved by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    pub name: String,
    /// Absolute path, already resolved against the solution directory.
    pub path: PathBuf,
    /// Raw project-type tag from the solution file.
    pub type_id: String,
}

impl SolutionEntry {
    /// Whether the entry is evaluable by the build engine.
    ///
    /// Folder pseudo-entries and entries without a known project-file
    /// extension (web sites, native projects) are excluded.
    pub fn is_buildable(&self) -> bool {
        if self.type_id.eq_ignore_ascii_case(SOLUTION_FOLDER_TYPE_ID) {
            return false;
        }
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| PROJECT_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
    }
}

/// A discovered project, the unit of work handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    pub name: String,
    /// Absolute path to the project file.
    pub path: PathBuf,
}

impl ProjectReference {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
