//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing season catalogs and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use plenilunio_runtime::Config;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Unroutable climate service: connections are refused immediately.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

/// Declarative test environment builder.
///
/// The world starts with a config file that skips the intro, points the
/// climate service at a closed port and reads the bundled catalog.
///
/// # Example
/// ```no_run
/// use plenilunio_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog();
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    config: Config,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let config = Config {
            api_base_url: UNREACHABLE_API.to_string(),
            intro_delay_ms: 0,
            climate_timeout_secs: 5,
            ..Config::default()
        };

        let world = Self {
            temp_dir,
            config_path,
            config,
            env_vars: HashMap::new(),
        };
        world.write_config();
        world
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn write_config(&self) {
        self.config
            .save_to(&self.config_path)
            .expect("Failed to write config");
    }

    /// Adjust the config file used by every command.
    pub fn with_config(mut self, edit: impl FnOnce(&mut Config)) -> Self {
        edit(&mut self.config);
        self.write_config();
        self
    }

    pub fn with_api_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.with_config(|config| config.api_base_url = url)
    }

    /// Use the three-season sample catalog instead of the bundled one.
    pub fn with_sample_catalog(self) -> Self {
        self.with_catalog_contents(fixtures::SAMPLE_CATALOG_JSON)
    }

    pub fn with_catalog_contents(self, contents: &str) -> Self {
        let path = fixtures::write_catalog_as(self.temp_dir.path(), "seasons.json", contents)
            .expect("Failed to write catalog");
        self.with_config(|config| config.catalog = path.display().to_string())
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("plenilunio")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--no-color")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute a command, feeding `stdin` as its standard input.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("plenilunio")
            .map_err(|e| anyhow::anyhow!("Failed to find plenilunio binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(stdin.to_string());

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

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
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
