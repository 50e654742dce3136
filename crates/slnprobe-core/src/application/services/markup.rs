//! Derived-Artifact Builder - maps markup sources to project outputs.

use tracing::debug;

use crate::domain::{MarkupFileRecord, ProjectRecord, paths, value_objects::items};

/// Walk the evaluated projects sequentially and collect one record per
/// markup item.
///
/// Traversal order follows `records`, so the emitted `files` array inherits
/// the aggregate's (input-stable) order. Records without a retained handle
/// contribute nothing.
pub fn collect_markup_files(records: &[ProjectRecord]) -> Vec<MarkupFileRecord> {
    let mut files = Vec::new();
    for record in records {
        let Some(evaluated) = &record.evaluated else {
            continue;
        };
        let project_dir = paths::project_dir(&record.path);
        for include in evaluated.items(items::MARKUP) {
            files.push(MarkupFileRecord {
                source_path: paths::absolutize(&project_dir, &include),
                target_path: record.target_path.clone(),
                project_path: record.path.clone(),
            });
        }
    }
    debug!(files = files.len(), "markup files collected");
    files
}
