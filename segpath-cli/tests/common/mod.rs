//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a temporary directory and the
//! `SEGPATH_*` variables removed, so the developer's own configuration never
//! leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SEGPATH_ENV_VARS: [&str; 3] = [
    "SEGPATH_CONVENTION",
    "SEGPATH_LOG_MODE",
    "SEGPATH_OUTPUT_FORMAT",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder for the segpath binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("segpath").expect("Failed to find segpath binary");
        cmd.env("HOME", &self.home);
        for var in SEGPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write the user configuration file `~/.segpath/config.yaml`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home.join(".segpath");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write a configuration file at an arbitrary name under the temp dir.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.home
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run segpath");

        assert!(
            output.status.success(),
            "segpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
