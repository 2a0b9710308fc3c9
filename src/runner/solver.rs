//! Solver invocation for a single test case

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tokio::fs;
use tokio::process::Command;

use crate::config::Config;
use crate::error::{AppResult, RunnerError};
use crate::runner::build::resolve_program;
use crate::runner::testcase::TestCase;

/// Outcome of one completed solver run
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    /// Test case base name
    pub name: String,
    /// Result file holding the solver's stdout
    pub result_path: PathBuf,
    /// Size of the result file in bytes
    pub bytes: u64,
    /// Wall-clock time of the solver run
    pub elapsed: Duration,
}

/// Run the solver on one test case, writing its stdout to the result file.
///
/// The solver is invoked as `<solver> [args] <test_dir>/<file>` from the base
/// directory. The result file is truncated first; on failure it is left as
/// whatever the solver managed to write.
pub async fn run_solver(config: &Config, testcase: &TestCase) -> AppResult<CaseOutcome> {
    let spec = &config.solver;
    let root = &config.paths.root;
    let result_path = testcase.result_path(&config.paths.solution_path());
    let input_path = testcase.input_path(&config.paths.test_dir);

    let output = fs::File::create(&result_path)
        .await
        .map_err(|e| RunnerError::io(&result_path, e))?
        .into_std()
        .await;

    tracing::debug!(
        test_case = %testcase.name,
        input = %input_path.display(),
        output = %result_path.display(),
        "Invoking solver"
    );

    let start = Instant::now();

    let mut command = Command::new(resolve_program(root, &spec.program));
    command
        .args(&spec.args)
        .arg(&input_path)
        .current_dir(root)
        .stdout(output);

    let status = command.status().await.map_err(|source| RunnerError::Spawn {
        program: spec.program.clone(),
        source,
    })?;

    let elapsed = start.elapsed();

    // Release the result file handle held by the command.
    drop(command);

    if !status.success() {
        return Err(RunnerError::SolverFailed {
            test_case: testcase.name.clone(),
            status,
        });
    }

    let bytes = fs::metadata(&result_path)
        .await
        .map(|m| m.len())
        .map_err(|e| RunnerError::io(&result_path, e))?;

    Ok(CaseOutcome {
        name: testcase.name.clone(),
        result_path,
        bytes,
        elapsed,
    })
}
