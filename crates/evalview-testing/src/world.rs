//! Isolated results directory for integration tests.

use anyhow::Result;
use assert_cmd::Command;
use evalview_types::ResultDocument;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary results directory plus an isolated config location.
///
/// # Example
/// ```no_run
/// use evalview_testing::{ResultsDir, documents};
///
/// let dir = ResultsDir::new()
///     .with_document("a", &documents::passing())
///     .with_raw("b.json", "{ broken");
///
/// let output = dir.command().output().unwrap();
/// assert!(output.status.success());
/// ```
pub struct ResultsDir {
    temp_dir: TempDir,
    results: PathBuf,
}

impl Default for ResultsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let results = temp_dir.path().join("runs");
        std::fs::create_dir_all(&results).expect("Failed to create results dir");

        Self { temp_dir, results }
    }

    /// Path of the results directory
    pub fn path(&self) -> &Path {
        &self.results
    }

    /// Root of the temporary environment (parent of the results directory)
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `<id>.json` containing the serialized document
    pub fn with_document(self, id: &str, document: &ResultDocument) -> Self {
        self.write_document(id, document)
            .expect("Failed to write result document");
        self
    }

    /// Write a file with arbitrary content
    pub fn with_raw(self, filename: &str, content: &str) -> Self {
        self.write_raw(filename, content)
            .expect("Failed to write result file");
        self
    }

    pub fn write_document(&self, id: &str, document: &ResultDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        self.write_raw(&format!("{}.json", id), &json)
    }

    pub fn write_raw(&self, filename: &str, content: &str) -> Result<()> {
        std::fs::write(self.results.join(filename), content)?;
        Ok(())
    }

    /// `evalview` command pointed at this directory with config and env isolated
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("evalview").expect("Failed to find evalview binary");
        cmd.arg(&self.results)
            .current_dir(self.temp_dir.path())
            .env("EVALVIEW_CONFIG", self.temp_dir.path().join("config.toml"))
            .env_remove("EVALVIEW_RESULTS_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Like [`ResultsDir::command`] but without the positional directory
    #[allow(deprecated)]
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("evalview").expect("Failed to find evalview binary");
        cmd.current_dir(self.temp_dir.path())
            .env("EVALVIEW_CONFIG", self.temp_dir.path().join("config.toml"))
            .env_remove("EVALVIEW_RESULTS_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}
