//! Per-request outcome types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// Failure Kind
// ============================================================================

/// Coarse reason a probe failed.
///
/// This is diagnostic only. The aggregate counts every failure the same way
/// regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Could not connect (refused, unreachable, DNS).
    Connect,
    /// The per-request timeout fired.
    Timeout,
    /// A response arrived but its status was rejected by the policy.
    Status(u16),
    /// The request could not be built or sent (bad URL, protocol error).
    Request,
    /// Anything else.
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Timeout => write!(f, "timeout"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Request => write!(f, "request"),
            Self::Other => write!(f, "other"),
        }
    }
}

// ============================================================================
// Request Outcome
// ============================================================================

/// Result of one probe.
///
/// `duration_ms` is present iff the probe succeeded, `failure` iff it failed.
/// Use the constructors; they keep the two in step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOutcome {
    /// Whether the request completed.
    pub success: bool,
    /// Wall-clock time of the request in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    /// Why it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl RequestOutcome {
    /// A successful probe that took `elapsed`.
    pub fn success(elapsed: Duration) -> Self {
        Self {
            success: true,
            duration_ms: Some(duration_to_ms(elapsed)),
            failure: None,
        }
    }

    /// A failed probe.
    pub fn failure(kind: FailureKind) -> Self {
        Self {
            success: false,
            duration_ms: None,
            failure: Some(kind),
        }
    }
}

/// Converts a duration to fractional milliseconds.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_duration_only() {
        let outcome = RequestOutcome::success(Duration::from_millis(42));
        assert!(outcome.success);
        assert_eq!(outcome.duration_ms, Some(42.0));
        assert!(outcome.failure.is_none());
    }

    #[test]
    fn test_failure_has_no_duration() {
        let outcome = RequestOutcome::failure(FailureKind::Connect);
        assert!(!outcome.success);
        assert!(outcome.duration_ms.is_none());
        assert_eq!(outcome.failure, Some(FailureKind::Connect));
    }

    #[test]
    fn test_sub_millisecond_precision() {
        let outcome = RequestOutcome::success(Duration::from_micros(1500));
        assert_eq!(outcome.duration_ms, Some(1.5));
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Connect.to_string(), "connect");
        assert_eq!(FailureKind::Status(503).to_string(), "status 503");
    }

    #[test]
    fn test_failed_outcome_json_omits_duration() {
        let json = serde_json::to_string(&RequestOutcome::failure(FailureKind::Timeout)).unwrap();
        assert_eq!(json, r#"{"success":false,"failure":"timeout"}"#);
    }
}
