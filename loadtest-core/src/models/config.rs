//! Run configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;

/// Number of requests sent when none (or garbage) is given.
pub const DEFAULT_TOTAL_REQUESTS: u64 = 500;

/// Wave width used when none (or garbage) is given.
pub const DEFAULT_CONCURRENCY: usize = 50;

// ============================================================================
// Status Policy
// ============================================================================

/// How a completed HTTP response is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Any response that arrives counts as a success, whatever its status.
    #[default]
    AnyStatus,
    /// Only 2xx responses count as a success.
    RequireSuccess,
}

impl StatusPolicy {
    /// Returns true if a response with this status code is a success.
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            Self::AnyStatus => true,
            Self::RequireSuccess => (200..300).contains(&status),
        }
    }
}

// ============================================================================
// Load Test Config
// ============================================================================

/// Parameters of a single load test run.
///
/// Immutable once built. Use [`LoadTestConfig::new`] and the `with_*`
/// methods; the constructor enforces the invariants (non-empty URL,
/// concurrency of at least one).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTestConfig {
    target_url: String,
    total_requests: u64,
    concurrency: usize,
    request_timeout: Option<Duration>,
    status_policy: StatusPolicy,
}

impl LoadTestConfig {
    /// Creates a config for `target_url`.
    ///
    /// `concurrency` is clamped to at least 1. `total_requests` may be zero.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the URL is empty.
    pub fn new(
        target_url: impl Into<String>,
        total_requests: u64,
        concurrency: usize,
    ) -> Result<Self, CoreError> {
        let target_url = target_url.into();
        if target_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "target URL must not be empty".to_string(),
            ));
        }

        Ok(Self {
            target_url,
            total_requests,
            concurrency: concurrency.max(1),
            request_timeout: None,
            status_policy: StatusPolicy::default(),
        })
    }

    /// Sets a per-request timeout. Off by default.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the status classification policy.
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// The URL every probe hits.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Total number of probes to issue.
    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    /// Maximum number of probes in flight at once. Always at least 1.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Per-request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Status classification policy.
    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }
}
