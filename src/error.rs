//! Typed errors for the aggregation pipeline.
//!
//! Division by zero is deliberately absent here: a ward with a zero total
//! is a defined all-zero result (see `pipeline::percentage`), not a failure.

use thiserror::Error;

/// Errors surfaced by the pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The declared category set is empty. An aggregation without
    /// categories is meaningless, so this is a configuration bug and
    /// should fail fast at startup.
    #[error("declared category set is empty")]
    EmptyCategorySet,

    /// No ward data for the requested scope. Recoverable: callers
    /// substitute the template set's no-data sentence.
    #[error("no ward data available")]
    EmptyData,
}
