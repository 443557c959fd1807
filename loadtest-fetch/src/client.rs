//! HTTP client abstractions.

use crate::error::FetchError;
use loadtest_core::LoadTestConfig;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// User agent string for loadtest.
const USER_AGENT: &str = concat!("loadtest/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a shared reqwest client.
///
/// Cloning is cheap and every clone shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, FetchError> {
        Self::build(None)
    }

    /// Creates a new HTTP client with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::build(Some(timeout))
    }

    /// Creates a client matching the timeout settings of a run.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the TLS backend cannot be initialized.
    pub fn for_config(config: &LoadTestConfig) -> Result<Self, FetchError> {
        Self::build(config.request_timeout())
    }

    fn build(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        debug!(?timeout, "Building HTTP client");

        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// Performs a simple GET request.
    ///
    /// Resolves once the response head has arrived; the body is not read.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on any transport-level failure.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        Ok(self.inner.get(url).send().await?)
    }
}
