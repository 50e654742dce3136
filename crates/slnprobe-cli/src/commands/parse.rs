//! The probe pipeline.
//!
//! Responsibility: merge flags with config, wire the production adapters
//! into the core services, and display results. No extraction logic lives
//! here.
//!
//! Pipeline order is fixed: toolchain resolution runs once before anything
//! else, discovery produces the work list, the pool fans evaluations out,
//! and the markup walk plus snapshot write run sequentially at the end.

use std::sync::Arc;

use tracing::{info, instrument};

use slnprobe_adapters::{DotnetSdkLister, MsbuildEngine, SnapshotWriter, SolpSolutionGrammar};
use slnprobe_core::{
    application::{
        EvaluationPool, ProjectDiscovery, ProjectEvaluator, ToolchainResolver,
        collect_markup_files,
    },
    domain::Snapshot,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute one probe run.
#[instrument(skip_all, fields(solution = %cli.solution.display()))]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // CLI flags win over config-file defaults.
    let sdk_version = cli.sdk_version.or(config.sdk.version);
    let include_prerelease = cli.include_prerelease || config.sdk.include_prerelease;
    let jobs = cli.jobs.or(config.concurrency);

    // ── 1. Toolchain resolution (fatal on failure) ────────────────────────
    let toolchain = ToolchainResolver::new(Box::new(DotnetSdkLister::new()))
        .resolve(sdk_version.as_deref(), include_prerelease)?;
    output.info(&format!(
        "toolchain {} ({})",
        toolchain.version,
        toolchain.install_root.display()
    ))?;

    // ── 2. Discovery ──────────────────────────────────────────────────────
    let references =
        ProjectDiscovery::new(Box::new(SolpSolutionGrammar::new())).discover(&cli.solution)?;
    output.header(&format!("{} project(s) discovered", references.len()))?;
    for reference in &references {
        output.print(&format!("  {} ({})", reference.name, reference.path.display()))?;
    }

    // ── 3. Parallel evaluation ────────────────────────────────────────────
    let evaluator = ProjectEvaluator::new(Arc::new(MsbuildEngine::new(toolchain)));
    let outcome = EvaluationPool::new(jobs).evaluate_all(&evaluator, &references)?;
    for record in &outcome.records {
        output.success(&format!(
            "{} -> {}",
            record.name,
            record.target_path.display()
        ))?;
    }
    for failure in &outcome.failures {
        output.warning(&format!("{}: {}", failure.project, failure.reason))?;
    }

    // ── 4. Derived artifacts + snapshot ───────────────────────────────────
    let files = collect_markup_files(&outcome.records);
    let snapshot = Snapshot::new(&cli.solution, outcome.records, files);
    let document = snapshot
        .to_json_pretty()
        .map_err(|source| CliError::SnapshotRender { source })?;

    // ── 5. Persist and echo ───────────────────────────────────────────────
    let written = SnapshotWriter::new().write(&snapshot, &document)?;
    info!(path = %written.display(), "snapshot persisted");

    // The document goes to stdout even in quiet mode; it *is* the output.
    println!("{document}");

    Ok(())
}
