//! Shared testing utilities for likhit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test run.
const HOST_ENV: [&str; 4] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "LIKHIT_CONFIG", "LIKHIT_LOG"];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `likhit` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("likhit").expect("Failed to locate likhit binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for name in HOST_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `likhit.toml` pointing the client at `api_url` with model `test-model`.
    pub fn write_config(&self, api_url: &str) -> PathBuf {
        self.write_file(
            "likhit.toml",
            &format!(
                "[generation]\napi_url = \"{}/\"\nmodel = \"test-model\"\ntimeout_secs = 5\n",
                api_url.trim_end_matches('/')
            ),
        )
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}

/// `--set` arguments for a complete, valid Job application.
#[allow(dead_code)]
pub fn job_assignments() -> Vec<&'static str> {
    vec![
        "-s",
        "recipientName=Mr. John Smith",
        "-s",
        "companyName=Acme Corp",
        "-s",
        "jobTitleAppliedFor=Software Engineer",
        "-s",
        "yourName=Ana Lee",
        "-s",
        "keySkills=Rust, Go, distributed systems",
    ]
}
