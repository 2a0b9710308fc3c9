//! Test case discovery

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{AppResult, RunnerError};

/// A single input file in the test directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Original file name, reused verbatim for the result file
    pub file_name: OsString,
    /// File name with its last extension stripped
    pub name: String,
}

impl TestCase {
    /// Create a test case from a directory entry name
    pub fn from_file_name(file_name: impl Into<OsString>) -> Self {
        let file_name = file_name.into();
        let name = base_name(&file_name.to_string_lossy()).to_string();

        Self { file_name, name }
    }

    /// Input path relative to the base directory, as handed to the solver
    pub fn input_path(&self, test_dir: &Path) -> PathBuf {
        test_dir.join(&self.file_name)
    }

    /// Result file path inside the solution directory
    pub fn result_path(&self, solution_dir: &Path) -> PathBuf {
        solution_dir.join(&self.file_name)
    }
}

/// Strip the last extension, treating leading dots as part of the name.
fn base_name(file_name: &str) -> &str {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(dot) => &file_name[..leading + dot],
        None => file_name,
    }
}

/// List the test cases in `dir`, sorted by file name.
///
/// Subdirectories are skipped. Symlinks are followed, and ones that cannot
/// be resolved are skipped.
pub async fn discover_test_cases(dir: &Path) -> AppResult<Vec<TestCase>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| RunnerError::io(dir, e))?;

    let mut testcases = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| RunnerError::io(dir, e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| RunnerError::io(&path, e))?;

        let is_file = if file_type.is_symlink() {
            match fs::metadata(&path).await {
                Ok(meta) => meta.is_file(),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unresolvable symlink in test directory"
                    );
                    continue;
                }
            }
        } else {
            file_type.is_file()
        };

        if !is_file {
            tracing::warn!(path = %path.display(), "Skipping non-file entry in test directory");
            continue;
        }

        testcases.push(TestCase::from_file_name(entry.file_name()));
    }

    testcases.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    tracing::debug!(
        dir = %dir.display(),
        count = testcases.len(),
        "Discovered test cases"
    );

    Ok(testcases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_strips_last_extension() {
        assert_eq!(TestCase::from_file_name("easy.txt").name, "easy");
        assert_eq!(TestCase::from_file_name("board.tar.gz").name, "board.tar");
        assert_eq!(TestCase::from_file_name("noext").name, "noext");
        assert_eq!(TestCase::from_file_name(".hidden").name, ".hidden");
        assert_eq!(TestCase::from_file_name("..foo").name, "..foo");
        assert_eq!(TestCase::from_file_name("..foo.txt").name, "..foo");
        assert_eq!(TestCase::from_file_name("trailing.").name, "trailing");
    }

    #[test]
    fn test_paths_keep_original_file_name() {
        let case = TestCase::from_file_name("hard.txt");
        assert_eq!(case.input_path(Path::new("Test")), PathBuf::from("Test/hard.txt"));
        assert_eq!(
            case.result_path(Path::new("/repo/Solution")),
            PathBuf::from("/repo/Solution/hard.txt")
        );
    }

    #[tokio::test]
    async fn test_discover_sorts_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hard.txt"), "h").unwrap();
        std::fs::write(dir.path().join("easy.txt"), "e").unwrap();
        std::fs::write(dir.path().join("medium"), "m").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let cases = discover_test_cases(dir.path()).await.unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["easy", "hard", "medium"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_discover_skips_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("easy.txt"), "e").unwrap();
        std::fs::write(dir.path().join("target.txt"), "t").unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("target.txt"), dir.path().join("linked.txt"))
            .unwrap();

        let cases = discover_test_cases(dir.path()).await.unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["easy", "linked", "target"]);
    }

    #[tokio::test]
    async fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_test_cases(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discover_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_test_cases(&dir.path().join("Test"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
