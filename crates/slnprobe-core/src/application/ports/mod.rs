//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `slnprobe-adapters` implement
//! these.
//!
//! ## Driven (Output) Ports
//!
//! - [`SdkLister`]: the OS facility listing installed toolchain SDKs
//! - [`SolutionGrammar`]: low-level solution-file parsing
//! - [`ProjectEngine`]: the project-file evaluation engine

use std::path::Path;
use std::sync::Arc;

use crate::domain::{EvaluatedProject, SolutionEntry};
use crate::error::ProbeResult;

/// Port for the "list installed SDKs" capability.
///
/// Implemented by:
/// - `slnprobe_adapters::sdk::DotnetSdkLister` (production)
/// - `slnprobe_adapters::sdk::FixedSdkLister` (testing)
///
/// Returns the raw textual listing, one `"<version> [<installRoot>]"` line
/// per SDK, in discovery order. Parsing is the resolver's job.
#[cfg_attr(test, mockall::automock)]
pub trait SdkLister: Send + Sync {
    fn list(&self) -> ProbeResult<String>;
}

/// Port for solution-file grammar parsing.
///
/// Implemented by:
/// - `slnprobe_adapters::solution::SolpSolutionGrammar` (production)
///
/// Returns the solution's project entries in declaration order, with paths
/// already resolved against the solution directory. Entry filtering is the
/// discoverer's job.
#[cfg_attr(test, mockall::automock)]
pub trait SolutionGrammar: Send + Sync {
    fn entries(&self, solution: &Path) -> ProbeResult<Vec<SolutionEntry>>;
}

/// Port for the project-file evaluation engine.
///
/// Implemented by:
/// - `slnprobe_adapters::engine::MsbuildEngine` (production)
/// - `slnprobe_adapters::engine::MemoryEngine` (testing)
///
/// Fully evaluates one project (the engine resolves its own imports and
/// targets) and returns queryable evaluated state. Constructed from a
/// [`crate::domain::ToolchainContext`], so evaluation cannot run before
/// toolchain resolution.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectEngine: Send + Sync {
    fn evaluate(&self, project: &Path) -> ProbeResult<Arc<dyn EvaluatedProject>>;
}
