// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # loadtest Core
//!
//! Core types, models, and traits for the `loadtest` tool.
//!
//! This crate holds everything the dispatcher and the presentation layer
//! share, without pulling in an HTTP stack:
//!
//! - Domain models (outcomes, configuration, running totals, summary)
//! - Error types
//! - The [`Prober`] trait the dispatcher drives
//!
//! ## Key Types
//!
//! ### Per-request
//! - [`RequestOutcome`] - Result of a single probe
//! - [`FailureKind`] - Coarse reason a probe failed
//!
//! ### Per-run
//! - [`LoadTestConfig`] - Immutable run parameters
//! - [`StatusPolicy`] - Whether HTTP status codes affect success
//! - [`Aggregate`] - Running totals folded wave by wave
//! - [`LoadTestSummary`] - Final report handed to the presentation layer

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Config
    LoadTestConfig,
    StatusPolicy,
    DEFAULT_CONCURRENCY,
    DEFAULT_TOTAL_REQUESTS,
    // Outcome
    FailureKind,
    RequestOutcome,
    // Summary
    Aggregate,
    LoadTestSummary,
};

// Re-export traits
pub use traits::Prober;
