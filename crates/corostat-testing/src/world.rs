//! Isolated environment for CLI integration tests.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory holding captured tool output and an optional config file.
///
/// # Example
/// ```no_run
/// use corostat_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_file("cfgtool.txt", fixtures::CFGTOOL_TWO_RINGS)
///     .with_file("quorumtool.txt", fixtures::QUORUMTOOL_QUORATE);
///
/// let result = world
///     .run(&["parse", "--ring-status", "cfgtool.txt", "--quorum-status", "quorumtool.txt"])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file relative to the temp root
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `contents` to `name` under the temp root
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        std::fs::write(self.path(name), contents).expect("Failed to write fixture");
        self
    }

    /// Build a `corostat` command rooted in the temp dir with a clean environment
    pub fn command(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("corostat").expect("Failed to find corostat binary");
        cmd.current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("COROSTAT_CONFIG")
            .env("XDG_CONFIG_HOME", self.path("xdg"))
            .env("HOME", self.root());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<CommandResult> {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CommandResult> {
        let output = self
            .command()
            .args(args)
            .write_stdin(stdin.as_bytes().to_vec())
            .output()?;
        Ok(CommandResult { output })
    }
}

/// Captured output of one CLI invocation
pub struct CommandResult {
    output: std::process::Output,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_slice(&self.output.stdout)?)
    }
}
