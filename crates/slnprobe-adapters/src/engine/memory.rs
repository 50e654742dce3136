//! In-memory engine adapter for testing.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use slnprobe_core::{
    application::{ApplicationError, ports::ProjectEngine},
    domain::EvaluatedProject,
    error::ProbeResult,
};

/// Scripted evaluated state for one project.
#[derive(Debug, Default, Clone)]
pub struct ScriptedProject {
    properties: BTreeMap<String, String>,
    items: BTreeMap<String, Vec<String>>,
}

impl ScriptedProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_items<I, S>(mut self, kind: impl Into<String>, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items
            .insert(kind.into(), includes.into_iter().map(Into::into).collect());
        self
    }
}

impl EvaluatedProject for ScriptedProject {
    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn items(&self, kind: &str) -> Vec<String> {
        self.items.get(kind).cloned().unwrap_or_default()
    }
}

/// Engine serving scripted evaluations from memory.
///
/// Configured before being shared; evaluation itself never mutates.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    projects: HashMap<PathBuf, ScriptedProject>,
    failing: HashSet<PathBuf>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful evaluation for `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, project: ScriptedProject) {
        self.projects.insert(path.into(), project);
    }

    /// Script an evaluation failure for `path`.
    pub fn fail(&mut self, path: impl Into<PathBuf>) {
        self.failing.insert(path.into());
    }
}

impl ProjectEngine for MemoryEngine {
    fn evaluate(&self, project: &Path) -> ProbeResult<Arc<dyn EvaluatedProject>> {
        if self.failing.contains(project) {
            return Err(ApplicationError::EngineFailure {
                project: project.to_path_buf(),
                reason: "scripted failure".into(),
            }
            .into());
        }
        match self.projects.get(project) {
            Some(scripted) => Ok(Arc::new(scripted.clone())),
            None => Err(ApplicationError::EngineFailure {
                project: project.to_path_buf(),
                reason: "no scripted evaluation".into(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slnprobe_core::error::ProbeError;

    #[test]
    fn scripted_project_served_by_path() {
        let mut engine = MemoryEngine::new();
        engine.insert(
            "/src/App/App.csproj",
            ScriptedProject::new().with_property("OutputType", "WinExe"),
        );

        let evaluated = engine.evaluate(Path::new("/src/App/App.csproj")).unwrap();
        assert_eq!(evaluated.property("OutputType").as_deref(), Some("WinExe"));
    }

    #[test]
    fn unknown_or_failing_paths_error() {
        let mut engine = MemoryEngine::new();
        engine.fail("/src/Bad/Bad.csproj");

        for path in ["/src/Bad/Bad.csproj", "/src/Unknown/Unknown.csproj"] {
            let err = engine.evaluate(Path::new(path)).unwrap_err();
            assert!(matches!(
                err,
                ProbeError::Application(ApplicationError::EngineFailure { .. })
            ));
        }
    }
}
