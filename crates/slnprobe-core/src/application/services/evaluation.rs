//! Project Evaluator - the per-project extraction step.
//!
//! One invocation fully evaluates one project through the engine port and
//! reads out the fixed property/item set, applying the path rules from
//! `domain::paths`. Values are taken exactly as the engine reports them.
//! Any engine failure becomes an [`EvalError`] so a single bad project can
//! never abort the batch.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{EvalError, ports::ProjectEngine},
    domain::{
        EvaluatedProject, ProjectRecord, ProjectReference, paths,
        value_objects::{items, properties},
    },
};

/// Evaluates single projects against the resolved toolchain's engine.
pub struct ProjectEvaluator {
    engine: Arc<dyn ProjectEngine>,
    working_dir: PathBuf,
}

impl ProjectEvaluator {
    /// The working directory is captured once at construction; it only
    /// anchors the designer-host path, which the engine may report relative
    /// to the invoking process.
    pub fn new(engine: Arc<dyn ProjectEngine>) -> Self {
        Self {
            engine,
            working_dir: env::current_dir().unwrap_or_default(),
        }
    }

    pub fn with_working_dir(engine: Arc<dyn ProjectEngine>, working_dir: PathBuf) -> Self {
        Self {
            engine,
            working_dir,
        }
    }

    /// Evaluate one project into a [`ProjectRecord`].
    #[instrument(skip_all, fields(project = %reference.name))]
    pub fn evaluate(&self, reference: &ProjectReference) -> Result<ProjectRecord, EvalError> {
        let evaluated =
            self.engine
                .evaluate(&reference.path)
                .map_err(|source| EvalError {
                    project: reference.name.clone(),
                    reason: source.to_string(),
                })?;

        let project_dir = paths::project_dir(&reference.path);

        let designer_host = prop(&evaluated, properties::PREVIEWER_HOST_TOOL_PATH);
        let designer_host_path = if designer_host.is_empty() {
            PathBuf::new()
        } else {
            paths::absolutize(&self.working_dir, &designer_host)
        };

        let project_references = evaluated
            .items(items::PROJECT_REFERENCE)
            .iter()
            .map(|include| paths::absolutize(&project_dir, include))
            .collect();

        let intermediate_output_path = paths::reference_cache_dir(
            &prop(&evaluated, properties::INTERMEDIATE_OUTPUT_PATH),
            &project_dir,
        );

        let record = ProjectRecord {
            name: reference.name.clone(),
            path: reference.path.clone(),
            target_path: prop(&evaluated, properties::TARGET_PATH).into(),
            output_type: prop(&evaluated, properties::OUTPUT_TYPE),
            designer_host_path,
            target_framework: prop(&evaluated, properties::TARGET_FRAMEWORK),
            deps_file_path: prop(&evaluated, properties::PROJECT_DEPS_FILE_PATH).into(),
            runtime_config_file_path: prop(&evaluated, properties::PROJECT_RUNTIME_CONFIG_FILE_PATH)
                .into(),
            project_references,
            intermediate_output_path,
            evaluated: Some(evaluated),
        };
        debug!(target = %record.target_path.display(), "project evaluated");
        Ok(record)
    }
}

fn prop(evaluated: &Arc<dyn EvaluatedProject>, name: &str) -> String {
    evaluated.property(name).unwrap_or_default()
}
