//! Shared testing utilities for scenarist CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variable the test config points the credential at.
pub const TEST_KEY_ENV: &str = "SCENARIST_TEST_API_KEY";

/// Model name written into the test config.
pub const TEST_MODEL: &str = "test-model";

/// Path mockito must serve for `TEST_MODEL`.
pub const GENERATE_PATH: &str = "/models/test-model:generateContent";

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

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `scenarist.toml` pointing the oracle at `api_url`.
    pub fn write_config(&self, api_url: &str) {
        let content = format!(
            r#"[oracle]
api_url = "{}"
model = "{}"
api_key_env = "{}"
timeout_secs = 10
"#,
            api_url, TEST_MODEL, TEST_KEY_ENV
        );
        fs::write(self.work_dir.join("scenarist.toml"), content).expect("Failed to write config");
    }

    /// Build a command for invoking the compiled `scenarist` binary with a test API key.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("scenarist").expect("Failed to locate scenarist binary");
        cmd.current_dir(&self.work_dir)
            .env(TEST_KEY_ENV, "test-key")
            .env_remove("SCENARIST_LOG");
        cmd
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read output file")
    }
}

/// Gemini `generateContent` response body carrying `text`.
pub fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
