//! Custom error types
//!
//! Every failure aborts the run. The variants only describe which step
//! failed; child diagnostics go straight to the inherited stderr.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::config::ConfigError;

/// Runner-wide error type
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    // Child process errors
    #[error("Build command `{command}` failed: {status}")]
    BuildFailed { command: String, status: ExitStatus },

    #[error("Solver failed on test case {test_case}: {status}")]
    SolverFailed { test_case: String, status: ExitStatus },

    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    // Filesystem errors
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("File error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl RunnerError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BuildFailed { .. } => "BUILD_FAILED",
            Self::SolverFailed { .. } => "SOLVER_FAILED",
            Self::Spawn { .. } => "SPAWN_FAILED",
            Self::MissingDirectory(_) => "MISSING_DIRECTORY",
            Self::Io { .. } => "FILE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using RunnerError
pub type AppResult<T> = Result<T, RunnerError>;
