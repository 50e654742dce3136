//! Parallel Aggregator - fans the work list out over a bounded worker pool.
//!
//! Evaluations are fully independent: the toolchain context is immutable by
//! the time any worker starts, and no worker observes another's result.
//! Collection preserves input order, which keeps the emitted snapshot
//! deterministic for a given discovery order.

use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::{
    application::{EvalError, services::evaluation::ProjectEvaluator},
    domain::{ProjectRecord, ProjectReference},
    error::{ProbeError, ProbeResult},
};

/// Successful records (in input order) and the failures that were dropped.
#[derive(Debug, Default)]
pub struct AggregateOutcome {
    pub records: Vec<ProjectRecord>,
    pub failures: Vec<EvalError>,
}

/// Bounded data-parallel driver for the evaluator.
pub struct EvaluationPool {
    concurrency: Option<usize>,
}

impl EvaluationPool {
    /// `concurrency` bounds the worker pool; `None` uses a pool sized to
    /// available parallelism.
    pub fn new(concurrency: Option<usize>) -> Self {
        Self { concurrency }
    }

    /// Evaluate every reference, logging and dropping per-project failures.
    #[instrument(skip_all, fields(projects = references.len()))]
    pub fn evaluate_all(
        &self,
        evaluator: &ProjectEvaluator,
        references: &[ProjectReference],
    ) -> ProbeResult<AggregateOutcome> {
        let run = || {
            references
                .par_iter()
                .map(|reference| evaluator.evaluate(reference))
                .collect::<Vec<_>>()
        };

        let results = match self.concurrency {
            Some(limit) => rayon::ThreadPoolBuilder::new()
                .num_threads(limit)
                .build()
                .map_err(|e| ProbeError::Internal {
                    message: format!("worker pool: {e}"),
                })?
                .install(run),
            None => run(),
        };

        let mut outcome = AggregateOutcome::default();
        for result in results {
            match result {
                Ok(record) => outcome.records.push(record),
                Err(failure) => {
                    warn!(project = %failure.project, reason = %failure.reason, "evaluation failed");
                    outcome.failures.push(failure);
                }
            }
        }
        info!(
            evaluated = outcome.records.len(),
            failed = outcome.failures.len(),
            "aggregation complete"
        );
        Ok(outcome)
    }
}
