//! Test runner - builds the solver and runs it over every test case
//!
//! A pass is strictly sequential: preflight, discovery, build, then one
//! solver invocation per test case. The first failure aborts the pass.

pub mod build;
pub mod solver;
pub mod testcase;

use std::path::Path;
use std::time::{Duration, Instant};

use tokio::fs;

use crate::config::Config;
use crate::error::{AppResult, RunnerError};

pub use build::run_build;
pub use solver::{CaseOutcome, run_solver};
pub use testcase::{TestCase, discover_test_cases};

/// Summary of a completed pass
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub cases: Vec<CaseOutcome>,
    pub elapsed: Duration,
}

impl RunReport {
    /// Total bytes written across all result files
    pub fn total_bytes(&self) -> u64 {
        self.cases.iter().map(|c| c.bytes).sum()
    }
}

/// Drives a full test pass
pub struct TestRunner {
    config: Config,
}

impl TestRunner {
    /// Create a new runner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the solver and run it once per test case.
    pub async fn run(&self) -> AppResult<RunReport> {
        let start = Instant::now();
        let test_path = self.config.paths.test_path();
        let solution_path = self.config.paths.solution_path();

        ensure_dir(&test_path).await?;
        ensure_dir(&solution_path).await?;

        let testcases = discover_test_cases(&test_path).await?;
        tracing::info!(
            count = testcases.len(),
            test_dir = %test_path.display(),
            "Found test cases"
        );

        run_build(&self.config).await?;

        let mut report = RunReport {
            cases: Vec::with_capacity(testcases.len()),
            ..Default::default()
        };

        for testcase in &testcases {
            println!("{}", progress_line(testcase));

            let outcome = run_solver(&self.config, testcase).await.inspect_err(|e| {
                tracing::error!(test_case = %testcase.name, error = %e, "Aborting run");
            })?;

            tracing::debug!(
                test_case = %outcome.name,
                bytes = outcome.bytes,
                elapsed_ms = outcome.elapsed.as_millis() as u64,
                "Test case finished"
            );
            report.cases.push(outcome);
        }

        report.elapsed = start.elapsed();
        Ok(report)
    }
}

/// Progress line printed before each solver run
pub fn progress_line(testcase: &TestCase) -> String {
    format!("Running test case {}...", testcase.name)
}

async fn ensure_dir(path: &Path) -> AppResult<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(RunnerError::MissingDirectory(path.to_path_buf())),
    }
}
