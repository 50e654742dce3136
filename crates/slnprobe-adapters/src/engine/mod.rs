//! Evaluation-engine adapters.

mod memory;
mod msbuild;

pub use memory::{MemoryEngine, ScriptedProject};
pub use msbuild::MsbuildEngine;
