//! Errors raised by tools and drivers.

use thiserror::Error;

/// Failure to reach or operate the browser itself.
///
/// An action the browser performed but rejected (unknown selector, element
/// not clickable) is not an error; it comes back as a
/// [`DriverOutcome`](crate::DriverOutcome) with an error status.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Browser is not available: {0}")]
    Unavailable(String),

    #[error("Browser did not respond within {0} seconds")]
    Timeout(u64),

    #[error("Unsupported browser operation: {0}")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("Tool execution timed out after {0} seconds")]
    Timeout(u64),

    #[error("Tool execution was cancelled")]
    Cancelled,

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),
}
