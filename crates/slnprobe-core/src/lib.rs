//! Slnprobe Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the slnprobe
//! solution-metadata prober, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          slnprobe-cli (CLI)             │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ToolchainResolver, ProjectDiscovery,  │
//! │   ProjectEvaluator, EvaluationPool)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (SdkLister, SolutionGrammar,            │
//! │  ProjectEngine)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    slnprobe-adapters (Infrastructure)   │
//! │ (DotnetSdkLister, SolpSolutionGrammar,  │
//! │  MsbuildEngine, SnapshotWriter)         │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectRecord, Snapshot, path rules)   │
//! │        No External I/O                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slnprobe_core::application::{
//!     EvaluationPool, ProjectDiscovery, ProjectEvaluator, ToolchainResolver,
//! };
//!
//! // 1. Resolve a toolchain (with an injected SdkLister adapter)
//! let toolchain = ToolchainResolver::new(lister).resolve(None, false)?;
//!
//! // 2. Discover the project set, then fan out evaluations
//! let references = ProjectDiscovery::new(grammar).discover(&input)?;
//! let evaluator = ProjectEvaluator::new(engine);
//! let outcome = EvaluationPool::new(None).evaluate_all(&evaluator, &references)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AggregateOutcome, EvalError, EvaluationPool, ProjectDiscovery, ProjectEvaluator,
        ToolchainResolver, collect_markup_files,
        ports::{ProjectEngine, SdkLister, SolutionGrammar},
    };
    pub use crate::domain::{
        EvaluatedProject, MarkupFileRecord, ProjectRecord, ProjectReference, SdkInstall, Snapshot,
        SolutionEntry, ToolchainContext,
    };
    pub use crate::error::{ProbeError, ProbeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
