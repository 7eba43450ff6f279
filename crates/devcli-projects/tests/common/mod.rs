//! Common test helpers for devcli-projects integration tests
//!
//! Provides a recording [`CommandRunner`] so scaffolding and cloning can be
//! verified without npm or git installed.

#![allow(dead_code)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use devcli_core::{CommandRunner, Error as CoreError, Result as CoreResult};
use std::sync::Mutex;
use tempfile::TempDir;

/// One recorded invocation: (command line, working directory)
pub type Call = (String, Option<Utf8PathBuf>);

/// Records command lines instead of running them
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Call>>,
    fail_on: Option<String>,
    missing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail (exit 1) on the first command containing `needle`
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Default::default()
        }
    }

    /// Report `program` as absent from PATH
    pub fn without(program: &str) -> Self {
        Self {
            missing: vec![program.to_string()],
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(cmd, _)| cmd).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command_line: &str, cwd: Option<&Utf8Path>) -> CoreResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((command_line.to_string(), cwd.map(Utf8Path::to_path_buf)));

        if let Some(needle) = &self.fail_on {
            if command_line.contains(needle.as_str()) {
                return Err(CoreError::command_failed(command_line, 1, "simulated failure"));
            }
        }

        // Mimic create-vite producing the project directory
        if let (Some(dir), Some(rest)) = (cwd, command_line.strip_prefix("npm create vite@latest ")) {
            if let Some(name) = rest.split_whitespace().next() {
                std::fs::create_dir_all(dir.join(name).join("src")).unwrap();
            }
        }

        Ok(String::new())
    }

    fn is_available(&self, program: &str) -> bool {
        !self.missing.iter().any(|m| m == program)
    }
}

/// Temporary directory with a UTF-8 path
pub fn utf8_temp_dir() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, path)
}
