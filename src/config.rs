//! Runner configuration management
//!
//! Configuration is read from environment variables (and an optional `.env`
//! file) once at startup. Every value has a default matching the classic
//! layout: `Test/` and `Solution/` next to a `Makefile` producing `./sudoku`.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_BUILD_COMMAND, DEFAULT_LOG_FILTER, DEFAULT_SOLUTION_DIR, DEFAULT_SOLVER_COMMAND,
    DEFAULT_TEST_DIR, env_vars,
};

/// Main runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    pub build: CommandSpec,
    pub solver: CommandSpec,
    pub logging: LoggingConfig,
}

/// Directory layout, relative to `root`
#[derive(Debug, Clone)]
pub struct PathsConfig {
    /// Base directory; children run with this as their working directory
    pub root: PathBuf,
    pub test_dir: PathBuf,
    pub solution_dir: PathBuf,
}

/// A program plus its leading arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let cwd = env::current_dir().map_err(|e| ConfigError::WorkingDirectory(e.to_string()))?;
        Self::from_source(|key| env::var(key).ok(), &cwd)
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// `cwd` is the base directory when `SUDOKU_ROOT` is unset, and anchors a
    /// relative `SUDOKU_ROOT`.
    pub fn from_source<F>(lookup: F, cwd: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            paths: PathsConfig::from_source(&lookup, cwd),
            build: command_from_source(&lookup, env_vars::BUILD_COMMAND, DEFAULT_BUILD_COMMAND)?,
            solver: command_from_source(&lookup, env_vars::SOLVER_COMMAND, DEFAULT_SOLVER_COMMAND)?,
            logging: LoggingConfig::from_source(&lookup)?,
        })
    }

    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathsConfig {
                root: root.into(),
                test_dir: PathBuf::from(DEFAULT_TEST_DIR),
                solution_dir: PathBuf::from(DEFAULT_SOLUTION_DIR),
            },
            build: CommandSpec::new(DEFAULT_BUILD_COMMAND),
            solver: CommandSpec::new(DEFAULT_SOLVER_COMMAND),
            logging: LoggingConfig {
                rust_log: DEFAULT_LOG_FILTER.to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

impl PathsConfig {
    fn from_source<F>(lookup: &F, cwd: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = match lookup(env_vars::ROOT) {
            Some(root) if !root.trim().is_empty() => cwd.join(root.trim()),
            _ => cwd.to_path_buf(),
        };

        Self {
            root,
            test_dir: PathBuf::from(
                lookup(env_vars::TEST_DIR).unwrap_or_else(|| DEFAULT_TEST_DIR.to_string()),
            ),
            solution_dir: PathBuf::from(
                lookup(env_vars::SOLUTION_DIR).unwrap_or_else(|| DEFAULT_SOLUTION_DIR.to_string()),
            ),
        }
    }

    /// Absolute path of the test-case directory
    pub fn test_path(&self) -> PathBuf {
        self.root.join(&self.test_dir)
    }

    /// Absolute path of the result directory
    pub fn solution_path(&self) -> PathBuf {
        self.root.join(&self.solution_dir)
    }
}

impl CommandSpec {
    /// A command with no leading arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a leading argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Split a command line on whitespace into program and arguments.
    ///
    /// No shell quoting is interpreted.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn from_source<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(env_vars::LOG_FORMAT).as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue(env_vars::LOG_FORMAT.to_string())),
        };

        Ok(Self {
            rust_log: lookup(env_vars::RUST_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            format,
        })
    }
}

fn command_from_source<F>(lookup: &F, key: &str, default: &str) -> Result<CommandSpec, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let line = lookup(key).unwrap_or_else(|| default.to_string());
    CommandSpec::parse(&line).ok_or_else(|| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),

    #[error("Cannot resolve working directory: {0}")]
    WorkingDirectory(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_source(lookup_from(&[]), Path::new("/work")).unwrap();

        assert_eq!(config.paths.root, PathBuf::from("/work"));
        assert_eq!(config.paths.test_path(), PathBuf::from("/work/Test"));
        assert_eq!(config.paths.solution_path(), PathBuf::from("/work/Solution"));
        assert_eq!(config.build, CommandSpec::new("make"));
        assert_eq!(config.solver, CommandSpec::new("./sudoku"));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.rust_log, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_overrides() {
        let lookup = lookup_from(&[
            ("SUDOKU_ROOT", "puzzles"),
            ("TEST_DIR", "inputs"),
            ("SOLUTION_DIR", "outputs"),
            ("BUILD_COMMAND", "make -j4 sudoku"),
            ("SOLVER_COMMAND", "build/sudoku --quiet"),
            ("LOG_FORMAT", "json"),
        ]);
        let config = Config::from_source(lookup, Path::new("/work")).unwrap();

        assert_eq!(config.paths.test_path(), PathBuf::from("/work/puzzles/inputs"));
        assert_eq!(config.paths.solution_path(), PathBuf::from("/work/puzzles/outputs"));
        assert_eq!(config.build, CommandSpec::new("make").arg("-j4").arg("sudoku"));
        assert_eq!(config.solver, CommandSpec::new("build/sudoku").arg("--quiet"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_absolute_root_replaces_cwd() {
        let config =
            Config::from_source(lookup_from(&[("SUDOKU_ROOT", "/srv/sudoku")]), Path::new("/work"))
                .unwrap();
        assert_eq!(config.paths.root, PathBuf::from("/srv/sudoku"));
    }

    #[test]
    fn test_blank_command_is_rejected() {
        let err = Config::from_source(lookup_from(&[("BUILD_COMMAND", "   ")]), Path::new("/"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key) if key == "BUILD_COMMAND"));
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let err = Config::from_source(lookup_from(&[("LOG_FORMAT", "xml")]), Path::new("/"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key) if key == "LOG_FORMAT"));
    }

    #[test]
    fn test_command_display() {
        let cmd = CommandSpec::parse("  make   -C  src ").unwrap();
        assert_eq!(cmd.to_string(), "make -C src");
        assert!(CommandSpec::parse("").is_none());
    }
}
