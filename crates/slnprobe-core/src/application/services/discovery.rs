//! Project Set Discoverer - turns the user-supplied path into the work list.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::SolutionGrammar},
    domain::{ProjectReference, value_objects::{PROJECT_EXTENSIONS, SOLUTION_EXTENSION}},
    error::ProbeResult,
};

/// Produces the ordered list of projects to evaluate.
pub struct ProjectDiscovery {
    grammar: Box<dyn SolutionGrammar>,
}

impl ProjectDiscovery {
    pub fn new(grammar: Box<dyn SolutionGrammar>) -> Self {
        Self { grammar }
    }

    /// Discover project references for `input`.
    ///
    /// - A directory (without a solution extension) is scanned
    ///   non-recursively for project files.
    /// - An existing solution file is delegated to the grammar collaborator;
    ///   only buildable entries survive.
    /// - Anything else is an input error. A *valid* input that merely yields
    ///   no projects returns an empty list, which callers treat as a
    ///   degenerate success.
    #[instrument(skip(self), fields(input = %input.display()))]
    pub fn discover(&self, input: &Path) -> ProbeResult<Vec<ProjectReference>> {
        if input.is_dir() && !has_extension(input, SOLUTION_EXTENSION) {
            return self.scan_directory(input);
        }
        if input.is_file() && has_extension(input, SOLUTION_EXTENSION) {
            return self.from_solution(input);
        }
        Err(ApplicationError::InputNotResolved {
            path: input.to_path_buf(),
        }
        .into())
    }

    /// Non-recursive scan for files with a known project extension.
    /// Filesystem enumeration order is kept as-is.
    fn scan_directory(&self, dir: &Path) -> ProbeResult<Vec<ProjectReference>> {
        let entries = fs::read_dir(dir).map_err(|_| ApplicationError::InputNotResolved {
            path: dir.to_path_buf(),
        })?;

        let mut references = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !has_project_extension(&path) {
                continue;
            }
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            debug!(project = %name, path = %path.display(), "discovered project file");
            references.push(ProjectReference::new(name, path));
        }
        Ok(references)
    }

    fn from_solution(&self, solution: &Path) -> ProbeResult<Vec<ProjectReference>> {
        let references = self
            .grammar
            .entries(solution)?
            .into_iter()
            .filter(|entry| {
                let keep = entry.is_buildable();
                if !keep {
                    debug!(entry = %entry.name, "skipping non-buildable solution entry");
                }
                keep
            })
            .map(|entry| ProjectReference::new(entry.name, entry.path))
            .collect();
        Ok(references)
    }
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}

fn has_project_extension(path: &Path) -> bool {
    PROJECT_EXTENSIONS.iter().any(|ext| has_extension(path, ext))
}
