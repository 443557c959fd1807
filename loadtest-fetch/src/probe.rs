//! Single-request probe.

use crate::client::HttpClient;
use crate::error::FetchError;
use loadtest_core::{FailureKind, LoadTestConfig, Prober, RequestOutcome, StatusPolicy};
use std::time::Instant;

/// Issues one GET per call and times it.
///
/// Transport errors never escape: they become a failed [`RequestOutcome`]
/// carrying only a coarse [`FailureKind`].
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: HttpClient,
    status_policy: StatusPolicy,
}

impl HttpProber {
    /// Creates a prober that accepts any status code.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            status_policy: StatusPolicy::AnyStatus,
        }
    }

    /// Creates a prober with the client and status policy of a run.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn for_config(config: &LoadTestConfig) -> Result<Self, FetchError> {
        Ok(Self::new(HttpClient::for_config(config)?).with_status_policy(config.status_policy()))
    }

    /// Sets the status classification policy.
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> RequestOutcome {
        let start = Instant::now();
        let result = self.client.get(url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                if self.status_policy.accepts(status) {
                    RequestOutcome::success(elapsed)
                } else {
                    RequestOutcome::failure(FailureKind::Status(status))
                }
            }
            Err(e) => RequestOutcome::failure(e.failure_kind()),
        }
    }
}
