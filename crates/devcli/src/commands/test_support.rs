//! Shared fixtures for command tests

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use devcli_core::{CommandRunner, ConfigStore, Error as CoreError, Result as CoreResult, UserConfig};
use devcli_projects::github::GitHubClient;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use super::Context;
use crate::prompt::scripted::ScriptedPrompter;

/// Records command lines instead of running them
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(String, Option<Utf8PathBuf>)>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Default::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command_line: &str, cwd: Option<&Utf8Path>) -> CoreResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((command_line.to_string(), cwd.map(Utf8Path::to_path_buf)));

        match &self.fail_on {
            Some(needle) if command_line.contains(needle.as_str()) => Err(CoreError::command_failed(
                command_line,
                128,
                "fatal: simulated failure",
            )),
            _ => Ok(String::new()),
        }
    }

    fn is_available(&self, _program: &str) -> bool {
        true
    }
}

/// Temporary working directory and config location for one test
pub struct Sandbox {
    _dir: TempDir,
    pub cwd: Utf8PathBuf,
    pub store: ConfigStore,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let cwd = root.join("work");
        std::fs::create_dir(&cwd).unwrap();
        let store = ConfigStore::at(root.join("home/.dev-cli-tool/config.json"));
        Self {
            _dir: dir,
            cwd,
            store,
        }
    }

    /// Build a command context over this sandbox
    pub fn context<'a>(
        &self,
        prompter: &'a mut ScriptedPrompter,
        runner: Arc<RecordingRunner>,
        github: GitHubClient,
    ) -> Context<'a> {
        Context {
            cwd: self.cwd.clone(),
            config: self.store.load(),
            store: self.store.clone(),
            prompter,
            runner,
            github,
        }
    }

    pub fn save_config(&self, config: &UserConfig) {
        self.store.save(config).unwrap();
    }

    /// Names of everything directly inside the working directory
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.cwd)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// GitHub client pointing at a port nothing listens on
pub fn offline_github() -> GitHubClient {
    GitHubClient::with_base_url("http://127.0.0.1:9")
}
