//! Production engine adapter over MSBuild's query interface.
//!
//! One evaluation shells out to the resolved toolchain's engine binary:
//!
//! ```text
//! dotnet <engine_path> <project> -nologo -getProperty:... -getItem:...
//! ```
//!
//! MSBuild fully evaluates the project (imports, targets, SDK resolution)
//! and prints the requested properties and items as one JSON document on
//! stdout, which is parsed into an [`EvaluatedProject`] here.
//!
//! There is no per-evaluation timeout: a hung evaluation blocks its worker.
//! This is the seam where one would go.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use slnprobe_core::{
    application::{ApplicationError, ports::ProjectEngine},
    domain::{
        EvaluatedProject, ToolchainContext,
        value_objects::{items, properties},
    },
    error::ProbeResult,
};

/// Evaluates projects with the toolchain selected at startup.
///
/// Construction requires a [`ToolchainContext`], so an engine cannot exist
/// before resolution has succeeded.
#[derive(Debug, Clone)]
pub struct MsbuildEngine {
    muxer: PathBuf,
    toolchain: ToolchainContext,
}

impl MsbuildEngine {
    pub fn new(toolchain: ToolchainContext) -> Self {
        Self {
            muxer: PathBuf::from("dotnet"),
            toolchain,
        }
    }

    pub fn with_muxer(toolchain: ToolchainContext, muxer: impl Into<PathBuf>) -> Self {
        Self {
            muxer: muxer.into(),
            toolchain,
        }
    }
}

impl ProjectEngine for MsbuildEngine {
    fn evaluate(&self, project: &Path) -> ProbeResult<Arc<dyn EvaluatedProject>> {
        let output = Command::new(&self.muxer)
            .arg(&self.toolchain.engine_path)
            .arg(project)
            .arg("-nologo")
            .arg(format!("-getProperty:{}", properties::EVALUATED.join(",")))
            .arg(format!("-getItem:{}", items::EVALUATED.join(",")))
            .output()
            .map_err(|e| engine_failure(project, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let reason = if stderr.trim().is_empty() {
                first_line(&stdout)
            } else {
                first_line(&stderr)
            };
            return Err(engine_failure(project, reason).into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let evaluation = parse_query_output(&stdout)
            .map_err(|e| engine_failure(project, format!("unreadable engine output: {e}")))?;
        debug!(project = %project.display(), "engine evaluation complete");
        Ok(Arc::new(evaluation))
    }
}

fn engine_failure(project: &Path, reason: String) -> ApplicationError {
    ApplicationError::EngineFailure {
        project: project.to_path_buf(),
        reason,
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("engine reported no output").to_string()
}

// ── Engine output format ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct QueryOutput {
    #[serde(default, rename = "Properties")]
    properties: BTreeMap<String, String>,
    #[serde(default, rename = "Items")]
    items: BTreeMap<String, Vec<QueryItem>>,
}

#[derive(Debug, Deserialize)]
struct QueryItem {
    #[serde(default, rename = "Identity")]
    identity: String,
}

/// Evaluated state parsed from one engine invocation.
#[derive(Debug)]
pub(crate) struct MsbuildEvaluation {
    properties: BTreeMap<String, String>,
    items: BTreeMap<String, Vec<String>>,
}

impl EvaluatedProject for MsbuildEvaluation {
    fn property(&self, name: &str) -> Option<String> {
        self.properties
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn items(&self, kind: &str) -> Vec<String> {
        self.items.get(kind).cloned().unwrap_or_default()
    }
}

fn parse_query_output(stdout: &str) -> serde_json::Result<MsbuildEvaluation> {
    let output: QueryOutput = serde_json::from_str(stdout)?;
    Ok(MsbuildEvaluation {
        properties: output.properties,
        items: output
            .items
            .into_iter()
            .map(|(kind, list)| (kind, list.into_iter().map(|i| i.identity).collect()))
            .collect(),
    })
}
