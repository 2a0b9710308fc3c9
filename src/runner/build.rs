//! Build step.
//!
//! The build command runs once in the base directory before any test case.
//! Its stdout and stderr are inherited so compiler diagnostics reach the
//! terminal untouched.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::config::Config;
use crate::error::{AppResult, RunnerError};

/// Run the configured build command and fail on a non-zero exit.
pub async fn run_build(config: &Config) -> AppResult<()> {
    let spec = &config.build;
    let root = &config.paths.root;

    tracing::info!(command = %spec, root = %root.display(), "Building solver");

    let status = Command::new(resolve_program(root, &spec.program))
        .args(&spec.args)
        .current_dir(root)
        .status()
        .await
        .map_err(|source| RunnerError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(RunnerError::BuildFailed {
            command: spec.to_string(),
            status,
        });
    }

    tracing::debug!("Build finished");
    Ok(())
}

/// Anchor a relative program path (one containing a separator) at `root`.
///
/// Bare names such as `make` are left for `PATH` lookup.
pub(crate) fn resolve_program(root: &Path, program: &str) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        root.join(path)
    } else {
        path.to_path_buf()
    }
}
