//! Shared testing utilities for studio-router CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `studio-router` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("studio-router").expect("Failed to locate studio-router binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a studio config file into the work directory and return its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test config");
        path
    }
}

pub const SAMPLE_CONFIG: &str = r#"appName = "studio"
env = "prod"

[sdlc]
url = "https://sdlc.example.com/api"

[engine]
url = "https://engine.example.com/api"

[depot]
url = "https://depot.example.com/depot/api"

[documentation]
url = "https://docs.example.com"
"#;
