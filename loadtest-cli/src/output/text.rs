//! Text output formatting with colors.

use loadtest_core::{LoadTestConfig, LoadTestSummary};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";

/// Shown instead of an average when nothing succeeded.
const NOT_APPLICABLE: &str = "N/A";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the lines printed before the run starts.
    pub fn format_banner(&self, config: &LoadTestConfig) -> String {
        [
            self.blue(&format!("🚀 Starting load test for {}", config.target_url())),
            self.yellow(&format!(
                "🔄 Sending {} requests with {} concurrency...",
                format_number(config.total_requests()),
                format_number(config.concurrency() as u64)
            )),
        ]
        .join("\n")
    }

    /// Formats the final report.
    pub fn format_summary(&self, summary: &LoadTestSummary) -> String {
        let mut lines = Vec::new();

        lines.push(self.green("✅ Load Test Complete!"));
        lines.push(self.green(&format!(
            "💥 Total Requests: {}",
            format_number(summary.total_requests)
        )));
        lines.push(self.green(&format!(
            "✔️ Successful Requests: {}",
            format_number(summary.successful_requests)
        )));
        lines.push(self.red(&format!(
            "❌ Failed Requests: {}",
            format_number(summary.failed_requests)
        )));

        for (kind, count) in &summary.failures {
            lines.push(self.dim(&format!("     {kind}: {}", format_number(*count))));
        }

        lines.push(self.cyan(&format!(
            "⚡ Average Response Time: {} ms",
            format_average(summary.average_success_duration_ms)
        )));

        if let Some(rps) = summary.requests_per_second() {
            lines.push(self.dim(&format!(
                "⏱️ Elapsed: {:.2} s ({rps:.2} req/s)",
                summary.elapsed_ms / 1000.0
            )));
        }

        lines.join("\n")
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn blue(&self, text: &str) -> String {
        self.paint(BLUE, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Formats an integer with `,` thousands separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats an average latency with two decimals, or `N/A`.
pub fn format_average(average_ms: Option<f64>) -> String {
    average_ms.map_or_else(|| NOT_APPLICABLE.to_string(), |ms| format!("{ms:.2}"))
}
