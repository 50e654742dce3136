//! Application layer: services orchestrating the probe pipeline over driven
//! ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, EvalError};
pub use services::{
    aggregation::{AggregateOutcome, EvaluationPool},
    discovery::ProjectDiscovery,
    evaluation::ProjectEvaluator,
    markup::collect_markup_files,
    toolchain::ToolchainResolver,
};
