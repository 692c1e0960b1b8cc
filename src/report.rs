//! Suite Reporting
//!
//! Collects per-check outcomes and renders a plain-text summary. The runner
//! uses the aggregate result for its exit status.

use std::fmt::Write;
use std::time::Duration;

/// Outcome of one property check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check (e.g., "length preservation")
    pub name: String,
    /// Whether the property held for the whole batch
    pub passed: bool,
    /// Wall-clock time the check took, batch generation included
    pub duration: Duration,
    /// Failure detail (offending index, expected/actual), if any
    pub detail: Option<String>,
}

/// Results of a full suite run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    results: Vec<CheckResult>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Render the summary table shown at the end of a run.
    pub fn summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "--- Suite Summary ---").unwrap();
        for result in &self.results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            writeln!(
                output,
                "{status}  {:<32} {:>9.3} ms",
                result.name,
                result.duration.as_secs_f64() * 1000.0
            )
            .unwrap();
            if let Some(ref detail) = result.detail {
                writeln!(output, "      {detail}").unwrap();
            }
        }
        writeln!(
            output,
            "{}/{} checks passed",
            self.passed_count(),
            self.total_count()
        )
        .unwrap();
        output
    }
}
