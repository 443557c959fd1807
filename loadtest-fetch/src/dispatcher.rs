//! Wave-synchronous request dispatch.
//!
//! A run is split into waves of at most `concurrency` probes. All probes of a
//! wave are driven together and the wave is joined before the next one
//! starts, so the offered load follows the slowest responder of each wave.
//! Outcomes are folded in issue order once their wave has settled.

use crate::error::FetchError;
use crate::probe::HttpProber;
use futures::future::join_all;
use loadtest_core::{Aggregate, LoadTestConfig, LoadTestSummary, Prober};
use std::time::Instant;
use tracing::{debug, info, instrument};

// ============================================================================
// Wave Plan
// ============================================================================

/// Iterator over wave sizes for a run.
///
/// Yields `concurrency` until fewer than that remain, then the remainder.
#[derive(Debug, Clone)]
pub struct WavePlan {
    remaining: u64,
    width: usize,
}

impl Iterator for WavePlan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        // `remaining` may exceed usize on 32-bit targets; `width` never does.
        let size = usize::try_from(self.remaining).map_or(self.width, |r| r.min(self.width));
        self.remaining -= size as u64;
        Some(size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let waves = self.remaining.div_ceil(self.width as u64);
        match usize::try_from(waves) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Splits `total` probes into waves of at most `concurrency`.
///
/// A `concurrency` of zero is treated as one.
pub fn wave_sizes(total: u64, concurrency: usize) -> WavePlan {
    WavePlan {
        remaining: total,
        width: concurrency.max(1),
    }
}

// ============================================================================
// Wave Dispatcher
// ============================================================================

/// Drives a [`Prober`] through a load test.
#[derive(Debug, Clone)]
pub struct WaveDispatcher<P> {
    prober: P,
}

impl<P: Prober> WaveDispatcher<P> {
    /// Creates a dispatcher around `prober`.
    pub fn new(prober: P) -> Self {
        Self { prober }
    }

    /// The prober this dispatcher drives.
    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Runs the whole load test and returns its summary.
    ///
    /// Never fails: every probe outcome, failed or not, is folded into the
    /// totals.
    #[instrument(
        skip_all,
        fields(
            url = %config.target_url(),
            total = config.total_requests(),
            concurrency = config.concurrency(),
        )
    )]
    pub async fn run(&self, config: &LoadTestConfig) -> LoadTestSummary {
        let url = config.target_url();
        let started = Instant::now();
        let mut aggregate = Aggregate::default();

        info!("Starting load test");

        for (index, size) in wave_sizes(config.total_requests(), config.concurrency()).enumerate() {
            let wave: Vec<_> = (0..size).map(|_| self.prober.probe(url)).collect();
            let outcomes = join_all(wave).await;
            aggregate.record_all(&outcomes);

            debug!(
                wave = index,
                size,
                successful = aggregate.successful_requests,
                failed = aggregate.failed_requests,
                "Wave settled"
            );
        }

        let summary = aggregate.finish(config, started.elapsed());

        info!(
            successful = summary.successful_requests,
            failed = summary.failed_requests,
            elapsed_ms = summary.elapsed_ms,
            "Load test complete"
        );

        summary
    }
}

/// Runs a load test against the real network.
///
/// # Errors
///
/// Returns [`FetchError::Http`] if the HTTP client cannot be built. Failures
/// of individual requests are reported in the summary, not here.
pub async fn run_load_test(config: &LoadTestConfig) -> Result<LoadTestSummary, FetchError> {
    let prober = HttpProber::for_config(config)?;
    Ok(WaveDispatcher::new(prober).run(config).await)
}
