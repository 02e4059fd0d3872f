//! Error types for the async lessons.

use std::time::Duration;

use thiserror::Error;

/// Failures surfaced through a pending computation.
///
/// Each is caught once, at the call site that awaits the chain or join.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsyncError {
    /// A risky operation was told to fail.
    #[error("operation failed")]
    OperationFailed,

    /// One branch of a fan-out failed.
    #[error("failed to fetch {resource} for user {user_id}")]
    FetchFailed {
        resource: &'static str,
        user_id: u32,
    },

    /// A step of a sequential chain failed.
    #[error("step `{step}` failed")]
    StepFailed { step: &'static str },

    /// The wrapped computation outlived its deadline.
    #[error("timed out after {}ms", .after.as_millis())]
    TimedOut { after: Duration },
}

/// Result type for async lessons.
pub type Result<T> = std::result::Result<T, AsyncError>;
