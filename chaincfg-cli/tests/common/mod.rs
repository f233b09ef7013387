//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment (cleared variables, temporary project dir)
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// Commands built from a `TestEnv` start with an empty process environment
/// and run inside the temporary directory, so neither the host's variables
/// nor a stray `.env` file can leak into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary project directory
    pub project_dir: PathBuf,
    /// Variables passed to every command
    vars: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with no variables set.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            project_dir,
            vars: Vec::new(),
        }
    }

    /// Add a variable to the environment every command sees.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.push((name.to_string(), value.to_string()));
        self
    }

    /// Every variable set, as for a fully configured deployment.
    pub fn fully_configured() -> Self {
        Self::new()
            .with_var("BNB_MAINNET_URL", "https://bsc-dataseed.example")
            .with_var("BNB_TESTNET_URL", "https://testnet.example")
            .with_var("PRIVATE_KEY", "0xdeadbeef")
            .with_var("API_COINMARKETCAP", "cmc-secret")
            .with_var("API_BNB_SCAN", "scan-secret")
    }

    /// Get a command builder with a cleared environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");
        cmd.env_clear().current_dir(&self.project_dir);
        for (name, value) in &self.vars {
            cmd.env(name, value);
        }
        cmd
    }

    /// Get the project path.
    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    /// Write a `.env` file into the project directory.
    pub fn write_env_file(&self, contents: &str) -> PathBuf {
        let path = self.project_dir.join(".env");
        std::fs::write(&path, contents).expect("Failed to write .env file");
        path
    }

    /// Run `chaincfg show --format json --reveal-secrets` and parse the output.
    pub fn show_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["show", "--format", "json", "--reveal-secrets"])
            .output()
            .expect("Failed to run show command");

        assert!(
            output.status.success(),
            "show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("show output is not valid JSON")
    }
}
