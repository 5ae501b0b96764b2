//! Error types for alignment jobs

use std::time::Duration;

use thiserror::Error;

use crate::wire::JobId;

/// Errors raised while submitting or polling alignment jobs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlignError {
    /// The request could not be delivered or the response not read
    #[error("Network error: {0}")]
    Transport(String),

    /// The service reported the job as failed
    #[error("alignment service error: {0}")]
    Service(String),

    /// The service answered with something that is not a valid response
    #[error("invalid service response: {0}")]
    InvalidResponse(String),

    /// The request cannot be sent (e.g. no residues)
    #[error("invalid alignment request: {0}")]
    InvalidRequest(String),

    #[error("alignment job {job} timed out after {}ms", .after.as_millis())]
    TimedOut { job: JobId, after: Duration },

    #[error("alignment job {0} cancelled")]
    Cancelled(JobId),
}

impl AlignError {
    pub fn transport(msg: impl Into<String>) -> Self {
        AlignError::Transport(msg.into())
    }
}

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;
