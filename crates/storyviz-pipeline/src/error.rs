//! Pipeline error types.

use thiserror::Error;

use storyviz_response::ParseError;
use storyviz_shots::AllocationError;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Upstream text generation failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Text generation failed: {0}")]
pub struct GenerationError(pub String);

/// Errors that can occur while building a StoryViz project.
///
/// Each stage keeps its own error kind so callers can decide what to retry:
/// re-invoking the backend makes sense for generation and parse failures,
/// never for allocation ones.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("Weight table produced an unknown shot type label: {0}")]
    UnknownShotType(String),
}
