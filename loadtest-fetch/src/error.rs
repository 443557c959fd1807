//! Fetch error types.

use loadtest_core::FailureKind;
use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client construction or request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    /// Maps the error onto the coarse failure kind recorded in an outcome.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Http(e) if e.is_timeout() => FailureKind::Timeout,
            Self::Http(e) if e.is_connect() => FailureKind::Connect,
            Self::Http(e) if e.is_builder() || e.is_request() => FailureKind::Request,
            Self::Http(_) => FailureKind::Other,
        }
    }
}
