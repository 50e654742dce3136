//! Infrastructure adapters for slnprobe.
//!
//! This crate implements the ports defined in
//! `slnprobe_core::application::ports`. It contains all subprocess, grammar,
//! and persistence concerns.

pub mod engine;
pub mod sdk;
pub mod snapshot;
pub mod solution;

// Re-export commonly used adapters
pub use engine::{MemoryEngine, MsbuildEngine, ScriptedProject};
pub use sdk::{DotnetSdkLister, FixedSdkLister};
pub use snapshot::SnapshotWriter;
pub use solution::SolpSolutionGrammar;
