//! Core error types for `loadtest`.

use thiserror::Error;

/// Core error type for `loadtest` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid run configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
