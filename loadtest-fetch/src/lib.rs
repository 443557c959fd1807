// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # loadtest Fetch
//!
//! The network half of `loadtest`.
//!
//! - [`client::HttpClient`] - reqwest wrapper with the run's timeout settings
//! - [`probe::HttpProber`] - times one GET and turns errors into outcomes
//! - [`dispatcher::WaveDispatcher`] - issues probes in bounded waves and
//!   folds the results
//!
//! ## Example
//!
//! ```ignore
//! use loadtest_core::LoadTestConfig;
//! use loadtest_fetch::run_load_test;
//!
//! let config = LoadTestConfig::new("http://localhost:3000", 1000, 10)?;
//! let summary = run_load_test(&config).await?;
//! println!("{} ok / {} failed", summary.successful_requests, summary.failed_requests);
//! ```

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod probe;

#[cfg(test)]
mod test_server;

// Re-export key types at crate root
pub use client::HttpClient;
pub use dispatcher::{WavePlan, WaveDispatcher, run_load_test, wave_sizes};
pub use error::FetchError;
pub use probe::HttpProber;
