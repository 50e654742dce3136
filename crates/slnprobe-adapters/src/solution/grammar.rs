//! Solution-file grammar adapter over the `solp` parser.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use solp::Consume;
use solp::api::Solution;
use tracing::debug;

use slnprobe_core::{
    application::{ApplicationError, ports::SolutionGrammar},
    domain::{SolutionEntry, paths},
    error::ProbeResult,
};

/// Production [`SolutionGrammar`] implementation.
///
/// `solp` drives a consumer callback per parsed solution; the collector
/// below captures the project table into owned entries, with paths resolved
/// against the solution directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolpSolutionGrammar;

impl SolpSolutionGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl SolutionGrammar for SolpSolutionGrammar {
    fn entries(&self, solution: &Path) -> ProbeResult<Vec<SolutionEntry>> {
        let path = solution
            .to_str()
            .ok_or_else(|| ApplicationError::SolutionUnreadable {
                path: solution.to_path_buf(),
                reason: "path is not valid UTF-8".into(),
            })?;

        let mut collector = EntryCollector::new(solution);
        solp::parse_file(path, &mut collector);

        if collector.failed.get() || !collector.parsed {
            return Err(ApplicationError::SolutionUnreadable {
                path: solution.to_path_buf(),
                reason: "solution grammar rejected the file".into(),
            }
            .into());
        }
        debug!(entries = collector.entries.len(), "solution parsed");
        Ok(collector.entries)
    }
}

struct EntryCollector {
    solution_dir: PathBuf,
    entries: Vec<SolutionEntry>,
    parsed: bool,
    // `Consume::err` takes `&self`.
    failed: Cell<bool>,
}

impl EntryCollector {
    fn new(solution: &Path) -> Self {
        Self {
            solution_dir: solution.parent().map(Path::to_path_buf).unwrap_or_default(),
            entries: Vec::new(),
            parsed: false,
            failed: Cell::new(false),
        }
    }
}

impl Consume for EntryCollector {
    fn ok(&mut self, solution: &Solution) {
        self.parsed = true;
        for project in solution.iterate_projects() {
            // Solution files carry `\`-separated relative paths.
            self.entries.push(SolutionEntry {
                name: project.name.to_string(),
                path: paths::absolutize(&self.solution_dir, project.path_or_uri),
                type_id: project.type_id.to_string(),
            });
        }
    }

    fn err(&self, _path: &str) {
        self.failed.set(true);
    }
}
