//! Allocation error types.

use thiserror::Error;

/// Result type for shot allocation.
pub type ShotResult<T> = Result<T, AllocationError>;

/// Errors that can occur during shot allocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Invalid allocation input: total shot count must be non-negative, got {0}")]
    InvalidInput(i64),
}
