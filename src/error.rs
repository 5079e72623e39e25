//! Crate error type.
//!
//! Degenerate numeric input (zero-norm columns, a single alternative) is
//! never an error; it is absorbed by [`crate::guard::safe_divide`]. Errors
//! are reserved for input that must be rejected before any computation
//! starts, and for failures of the background worker channel.

use thiserror::Error;

/// Errors produced by ranking, analysis, and the worker boundary.
#[derive(Debug, Error)]
pub enum McdaError {
    /// Input failed a precondition check (length mismatch, unknown
    /// direction string, non-finite value, invalid configuration).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The worker unit went away before delivering its single response.
    #[error("ranking worker disconnected before responding")]
    WorkerDisconnected,

    /// The worker answered with an `error` message.
    #[error("ranking worker rejected the request: {0}")]
    Rejected(String),

    /// The worker thread could not be started.
    #[error("failed to spawn ranking worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// A message could not be decoded or encoded as JSON.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl McdaError {
    /// Shorthand for [`McdaError::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, McdaError>;
