//! TestWorld pattern for CLI integration tests.
//!
//! A world owns an isolated data directory and a mock inventory server;
//! every CLI invocation is pointed at both.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::MockServer;

/// Declarative test environment.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use bintrack_testing::{TestWorld, fixtures, server};
///
/// let world = TestWorld::start().await;
/// server::mount_records(world.server(), &fixtures::records()).await;
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// # }
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    server: MockServer,
    env_vars: HashMap<String, String>,
    format: String,
}

impl TestWorld {
    /// Create a new isolated environment with a running mock server.
    pub async fn start() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".bintrack");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            server: MockServer::start().await,
            env_vars: HashMap::new(),
            format: "plain".to_string(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn server_uri(&self) -> String {
        self.server.uri()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Output format passed as `--format` (default `plain`).
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = format.to_string();
        self
    }

    /// Configure a CLI command with this world's data dir, server and env.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--server")
            .arg(self.server_uri())
            .arg("--format")
            .arg(&self.format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("BINTRACK_PATH");
        cmd.env_remove("BINTRACK_SERVER");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Build the `bintrack` command without running it.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("bintrack")
            .map_err(|e| anyhow::anyhow!("Failed to find bintrack binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the binary with `args` and capture its output.
    ///
    /// The mock server runs on its own thread, so blocking here is fine.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);

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
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
