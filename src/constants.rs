//! Application-wide constants
//!
//! Default values for the runner, grouped by purpose.

// =============================================================================
// DIRECTORY LAYOUT
// =============================================================================

/// Directory (relative to the base path) holding the test-case inputs
pub const DEFAULT_TEST_DIR: &str = "Test";

/// Directory (relative to the base path) receiving one result file per test case
pub const DEFAULT_SOLUTION_DIR: &str = "Solution";

// =============================================================================
// EXTERNAL COMMANDS
// =============================================================================

/// Build command run once before any test case
pub const DEFAULT_BUILD_COMMAND: &str = "make";

/// Solver executable produced by the build
pub const DEFAULT_SOLVER_COMMAND: &str = "./sudoku";

// =============================================================================
// LOGGING
// =============================================================================

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sudoku_runner=info";

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

pub mod env_vars {
    pub const ROOT: &str = "SUDOKU_ROOT";
    pub const TEST_DIR: &str = "TEST_DIR";
    pub const SOLUTION_DIR: &str = "SOLUTION_DIR";
    pub const BUILD_COMMAND: &str = "BUILD_COMMAND";
    pub const SOLVER_COMMAND: &str = "SOLVER_COMMAND";
    pub const RUST_LOG: &str = "RUST_LOG";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
