//! Sudoku Runner - builds the Sudoku solver and captures its output
//!
//! For every file in `Test/`, the solver is run once and its standard output
//! is written to the same-named file in `Solution/`.
//!
//! # Architecture
//!
//! - **Config**: environment-driven paths and commands
//! - **Runner**: discovery, build step, per-case solver invocation
//! - **Error**: one error type, every failure aborts the run

pub mod config;
pub mod constants;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppResult, RunnerError};
pub use runner::{RunReport, TestRunner};
