//! Trait definitions for loadtest.

use crate::models::RequestOutcome;

/// Something that can issue one request against a URL and report how it went.
///
/// Implementors must absorb every transport error and turn it into a failed
/// [`RequestOutcome`]; `probe` itself never fails. Each call is independent of
/// every other call, so a dispatcher may have many of them in flight at once.
pub trait Prober: Send + Sync {
    /// Issues a single request to `url` and measures it.
    fn probe(&self, url: &str) -> impl std::future::Future<Output = RequestOutcome> + Send;
}

