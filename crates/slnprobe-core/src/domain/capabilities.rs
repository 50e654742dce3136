//! Capability abstraction over evaluated project state.

use std::fmt;

/// Queryable evaluated state of one project.
///
/// The engine adapter produces one of these per successful evaluation; a
/// [`crate::domain::ProjectRecord`] retains it so the derived-artifact
/// builder can re-query markup items without holding a concrete engine type.
/// The surface is deliberately narrow: named properties and item include
/// paths, nothing else.
pub trait EvaluatedProject: fmt::Debug + Send + Sync {
    /// The evaluated value of a named property, if the engine reported one.
    fn property(&self, name: &str) -> Option<String>;

    /// Declared include paths of all items of the given kind, in engine
    /// order. Duplicates are preserved.
    fn items(&self, kind: &str) -> Vec<String>;
}
