// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! loadtest CLI - bounded-concurrency HTTP load generation.
//!
//! # Examples
//!
//! ```bash
//! # 500 requests, 50 at a time
//! loadtest http://localhost:3000
//!
//! # 1000 requests, 10 at a time
//! loadtest http://localhost:3000 1000 10
//!
//! # Give up on any request after 2 seconds
//! loadtest http://localhost:3000 1000 10 --timeout-ms 2000
//!
//! # Count 4xx/5xx as failures, report as JSON
//! loadtest http://localhost:3000 --fail-on-status --format json --pretty
//! ```

mod args;
mod output;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use loadtest_core::{
    DEFAULT_CONCURRENCY, DEFAULT_TOTAL_REQUESTS, LoadTestConfig, LoadTestSummary, StatusPolicy,
};
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use output::{JsonFormatter, TextFormatter};

// ============================================================================
// CLI Definition
// ============================================================================

const USAGE: &str = "Usage: loadtest <url> [requests] [concurrency]";
const EXAMPLE: &str = "Example: loadtest http://localhost:3000 1000 10";

/// loadtest - HTTP load generation from the command line.
#[derive(Parser)]
#[command(name = "loadtest")]
#[command(about = "Send bounded-concurrency HTTP GET load at a URL")]
#[command(long_about = r#"
loadtest sends GET requests to a URL in waves. Each wave holds at most
<concurrency> requests and must finish completely before the next starts.
When all requests have settled it reports successes, failures and the
average response time of the successful ones.

Any response counts as a success unless --fail-on-status is given; only
transport errors (refused, DNS, TLS, timeout) count as failures.

Examples:
  loadtest http://localhost:3000              # 500 requests, 50 at a time
  loadtest http://localhost:3000 1000 10      # 1000 requests, 10 at a time
  loadtest http://localhost:3000 --format json
"#)]
#[command(version)]
pub struct Cli {
    /// Target URL.
    pub url: Option<String>,

    /// Total number of requests. Falls back to 500 if missing or not a positive integer.
    #[arg(allow_hyphen_values = true)]
    pub requests: Option<String>,

    /// Requests per wave. Falls back to 50 if missing or not a positive integer.
    #[arg(allow_hyphen_values = true)]
    pub concurrency: Option<String>,

    /// Per-request timeout in milliseconds (default: wait forever).
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Count non-2xx responses as failures.
    #[arg(long)]
    pub fail_on_status: bool,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no banner, no logging).
    #[arg(long, short)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed, whatever the individual outcomes.
    Success = 0,
    /// Missing URL or unusable HTTP client.
    Error = 1,
}

impl Cli {
    /// Builds the run configuration, or `None` if no URL was given.
    fn config(&self) -> Option<Result<LoadTestConfig>> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;

        let total = args::parse_count(self.requests.as_deref(), DEFAULT_TOTAL_REQUESTS);
        let concurrency = args::parse_count(self.concurrency.as_deref(), DEFAULT_CONCURRENCY);

        let config = LoadTestConfig::new(url, total, concurrency).map(|config| {
            let config = if self.fail_on_status {
                config.with_status_policy(StatusPolicy::RequireSuccess)
            } else {
                config
            };
            match self.timeout_ms {
                Some(ms) => config.with_request_timeout(Duration::from_millis(ms)),
                None => config,
            }
        });

        Some(config.map_err(Into::into))
    }

    /// Whether the banner and progress spinner are drawn.
    fn shows_progress(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("loadtest=debug,info")
    } else {
        EnvFilter::new("loadtest=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let cli = &cli;
    let code = execute(cli, |config| async move { run(cli, &config).await }).await;

    std::process::exit(code as i32);
}

/// Resolves the configuration and hands it to `run`.
///
/// A missing URL prints usage and returns [`ExitCode::Error`] without calling
/// `run`, so no request is ever issued.
async fn execute<F, Fut>(cli: &Cli, run: F) -> ExitCode
where
    F: FnOnce(LoadTestConfig) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let Some(config) = cli.config() else {
        eprintln!("❌ Error: You must provide a URL.");
        eprintln!("{USAGE}");
        eprintln!("{EXAMPLE}");
        return ExitCode::Error;
    };

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            ExitCode::Error
        }
    }
}

/// Runs the load test and prints the report.
async fn run(cli: &Cli, config: &LoadTestConfig) -> Result<()> {
    debug!(?config, "Resolved configuration");

    let text = TextFormatter::new(!cli.no_color);

    if cli.shows_progress() {
        println!("{}", text.format_banner(config));
    }

    let spinner = spinner(cli);
    let result = loadtest_fetch::run_load_test(config).await;
    spinner.finish_and_clear();

    print_summary(cli, &text, &result?)
}

/// Spinner drawn to stderr while the run is in progress.
fn spinner(cli: &Cli) -> ProgressBar {
    if !cli.shows_progress() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Running load test...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_summary(cli: &Cli, text: &TextFormatter, summary: &LoadTestSummary) -> Result<()> {
    match cli.format {
        OutputFormat::Text => println!("{}", text.format_summary(summary)),
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).format(summary)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("loadtest").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_url_has_no_config() {
        assert!(parse(&[]).config().is_none());
        assert!(parse(&[""]).config().is_none());
    }

    #[tokio::test]
    async fn test_missing_url_exits_with_error_before_running() {
        for args in [&[][..], &[""][..], &["  ", "10", "2"][..]] {
            let cli = parse(args);
            let mut ran = false;

            let code = execute(&cli, |_| {
                ran = true;
                async { Ok(()) }
            })
            .await;

            assert_eq!(code, ExitCode::Error, "Failed for {args:?}");
            assert!(!ran, "Run reached for {args:?}");
        }
    }

    #[tokio::test]
    async fn test_completed_run_exits_with_success() {
        let cli = parse(&["http://localhost:3000", "7", "3"]);
        let mut seen = None;

        let code = execute(&cli, |config| {
            seen = Some((config.total_requests(), config.concurrency()));
            async { Ok(()) }
        })
        .await;

        assert_eq!(code, ExitCode::Success);
        assert_eq!(seen, Some((7, 3)));
    }

    #[tokio::test]
    async fn test_failed_run_exits_with_error() {
        let cli = parse(&["http://localhost:3000", "--quiet"]);

        let code = execute(&cli, |_| async { Err(anyhow::anyhow!("client unavailable")) }).await;

        assert_eq!(code, ExitCode::Error);
    }

    #[test]
    fn test_progress_only_for_text_output() {
        assert!(parse(&["http://localhost:3000"]).shows_progress());
        assert!(!parse(&["http://localhost:3000", "--quiet"]).shows_progress());
        assert!(!parse(&["http://localhost:3000", "--format", "json"]).shows_progress());
        assert!(spinner(&parse(&["http://localhost:3000", "-q"])).is_hidden());
    }

    #[test]
    fn test_positional_arguments() {
        let config = parse(&["http://localhost:3000", "1000", "10"])
            .config()
            .unwrap()
            .unwrap();

        assert_eq!(config.target_url(), "http://localhost:3000");
        assert_eq!(config.total_requests(), 1000);
        assert_eq!(config.concurrency(), 10);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.status_policy(), StatusPolicy::AnyStatus);
    }

    #[test]
    fn test_defaults_when_omitted() {
        let config = parse(&["http://localhost:3000"]).config().unwrap().unwrap();

        assert_eq!(config.total_requests(), 500);
        assert_eq!(config.concurrency(), 50);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = parse(&["http://localhost:3000", "lots", "-3"])
            .config()
            .unwrap()
            .unwrap();

        assert_eq!(config.total_requests(), 500);
        assert_eq!(config.concurrency(), 50);
    }

    #[test]
    fn test_numeric_prefixes_are_used() {
        let config = parse(&["http://localhost:3000", "12abc", "1.5"])
            .config()
            .unwrap()
            .unwrap();

        assert_eq!(config.total_requests(), 12);
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn test_options() {
        let cli = parse(&[
            "http://localhost:3000",
            "--timeout-ms",
            "250",
            "--fail-on-status",
            "--format",
            "json",
        ]);
        let config = cli.config().unwrap().unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(config.status_policy(), StatusPolicy::RequireSuccess);
    }
}
