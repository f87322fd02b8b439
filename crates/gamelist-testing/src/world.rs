//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory holding its own catalog and config file,
//! so runs never pick up the user's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use gamelist_types::Item;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use gamelist_testing::TestWorld;
///
/// let world = TestWorld::new().with_seven_games();
///
/// let result = world.run(&["list", "--search", "zel"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    catalog_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment using the built-in catalog.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            catalog_path: None,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `items` as the catalog file used by every run.
    pub fn with_catalog(mut self, items: &[Item]) -> Self {
        let path = self.temp_dir.path().join("games.json");
        std::fs::write(&path, fixtures::catalog_json(items)).expect("Failed to write catalog");
        self.catalog_path = Some(path);
        self
    }

    /// Use the reference seven-game catalog.
    pub fn with_seven_games(self) -> Self {
        self.with_catalog(&fixtures::seven_games())
    }

    /// Write raw catalog text (for malformed-input tests).
    pub fn with_raw_catalog(mut self, content: &str) -> Self {
        let path = self.temp_dir.path().join("games.json");
        std::fs::write(&path, content).expect("Failed to write catalog");
        self.catalog_path = Some(path);
        self
    }

    /// Write the TOML config file.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        if let Some(catalog) = &self.catalog_path {
            cmd.arg("--catalog").arg(catalog);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("GAMELIST_CONFIG");
        cmd.env_remove("GAMELIST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with the given arguments.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, None)
    }

    /// Execute the CLI feeding `input` on stdin (for `browse`).
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        self.execute(args, Some(input))
    }

    #[allow(deprecated)]
    fn execute(&self, args: &[&str], input: Option<&str>) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("gamelist")
            .map_err(|e| anyhow::anyhow!("Failed to find gamelist binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        if let Some(input) = input {
            cmd.write_stdin(input.to_string());
        }

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as a single JSON document.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Parse stdout as a sequence of JSON documents (one per render).
    pub fn json_stream(&self) -> Result<Vec<serde_json::Value>> {
        let mut docs = Vec::new();
        for doc in serde_json::Deserializer::from_str(&self.stdout).into_iter::<serde_json::Value>() {
            docs.push(doc?);
        }
        Ok(docs)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
