//! Domain models for loadtest.
//!
//! ## Submodules
//!
//! - [`config`] - Run parameters (LoadTestConfig, StatusPolicy)
//! - [`outcome`] - Per-request results (RequestOutcome, FailureKind)
//! - [`summary`] - Running totals and the final report (Aggregate, LoadTestSummary)

mod config;
mod outcome;
mod summary;

// Re-export everything at the models level
pub use config::{DEFAULT_CONCURRENCY, DEFAULT_TOTAL_REQUESTS, LoadTestConfig, StatusPolicy};
pub use outcome::{FailureKind, RequestOutcome};
pub use summary::{Aggregate, LoadTestSummary};
