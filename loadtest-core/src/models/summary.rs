//! Running totals and the final run report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use super::config::LoadTestConfig;
use super::outcome::{FailureKind, RequestOutcome, duration_to_ms};

// ============================================================================
// Aggregate
// ============================================================================

/// Running totals of a load test.
///
/// Owned by the dispatcher and updated only between waves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Probes that completed.
    pub successful_requests: u64,
    /// Probes that failed.
    pub failed_requests: u64,
    /// Sum of the durations of successful probes, in milliseconds.
    pub total_duration_ms: f64,
    /// Failed probes by kind.
    pub failures: BTreeMap<FailureKind, u64>,
}

impl Aggregate {
    /// Folds one outcome into the totals.
    pub fn record(&mut self, outcome: &RequestOutcome) {
        if outcome.success {
            self.successful_requests += 1;
            self.total_duration_ms += outcome.duration_ms.unwrap_or_default();
        } else {
            self.failed_requests += 1;
            let kind = outcome.failure.unwrap_or(FailureKind::Other);
            *self.failures.entry(kind).or_insert(0) += 1;
        }
    }

    /// Folds a settled wave, in order.
    pub fn record_all<'a>(&mut self, outcomes: impl IntoIterator<Item = &'a RequestOutcome>) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }

    /// Number of outcomes folded so far.
    pub fn settled(&self) -> u64 {
        self.successful_requests + self.failed_requests
    }

    /// Mean duration of successful probes, if there were any.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_success_duration_ms(&self) -> Option<f64> {
        (self.successful_requests > 0)
            .then(|| self.total_duration_ms / self.successful_requests as f64)
    }

    /// Finalizes the totals into a summary.
    pub fn finish(self, config: &LoadTestConfig, elapsed: Duration) -> LoadTestSummary {
        debug_assert_eq!(self.settled(), config.total_requests());

        LoadTestSummary {
            target_url: config.target_url().to_string(),
            total_requests: config.total_requests(),
            successful_requests: self.successful_requests,
            failed_requests: self.failed_requests,
            average_success_duration_ms: self.average_success_duration_ms(),
            failures: self
                .failures
                .into_iter()
                .map(|(kind, count)| (kind.to_string(), count))
                .collect(),
            elapsed_ms: duration_to_ms(elapsed),
        }
    }
}

// ============================================================================
// Load Test Summary
// ============================================================================

/// Final report of a load test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTestSummary {
    /// URL that was tested.
    pub target_url: String,
    /// Probes issued.
    pub total_requests: u64,
    /// Probes that succeeded.
    pub successful_requests: u64,
    /// Probes that failed.
    pub failed_requests: u64,
    /// Mean latency of successful probes. `None` when nothing succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_success_duration_ms: Option<f64>,
    /// Failed probes keyed by failure kind.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub failures: BTreeMap<String, u64>,
    /// Wall-clock time of the whole run in milliseconds.
    pub elapsed_ms: f64,
}

impl LoadTestSummary {
    /// Completed probes per second over the whole run.
    #[allow(clippy::cast_precision_loss)]
    pub fn requests_per_second(&self) -> Option<f64> {
        (self.elapsed_ms > 0.0).then(|| self.total_requests as f64 / (self.elapsed_ms / 1000.0))
    }
}
