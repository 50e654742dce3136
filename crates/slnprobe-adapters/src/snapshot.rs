//! Snapshot persistence.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use slnprobe_core::{application::ApplicationError, domain::Snapshot, error::ProbeResult};

/// Writes the rendered snapshot document next to the system temp directory.
///
/// The file name is derived from the input solution's file name
/// (`<originalFileName>.json`) so repeated runs for the same solution
/// overwrite the same document.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    target_dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new() -> Self {
        Self {
            target_dir: env::temp_dir(),
        }
    }

    pub fn with_target_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// The path the snapshot for this solution is written to.
    pub fn target_path(&self, snapshot: &Snapshot) -> PathBuf {
        let file_name = snapshot
            .solution
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string());
        self.target_dir.join(format!("{file_name}.json"))
    }

    /// Persist `document` (the already-rendered snapshot JSON).
    pub fn write(&self, snapshot: &Snapshot, document: &str) -> ProbeResult<PathBuf> {
        let target = self.target_path(snapshot);
        fs::write(&target, document).map_err(|e| ApplicationError::SnapshotWrite {
            path: target.clone(),
            reason: e.to_string(),
        })?;
        info!(path = %target.display(), "snapshot written");
        Ok(target)
    }
}

impl Default for SnapshotWriter {
    fn default() -> Self {
        Self::new()
    }
}
