//! Shell process runner
//!
//! Runs a command line through the platform shell and captures stdout and
//! stderr into a single buffer, in the order the bytes arrive. Every
//! invocation is awaited to completion before the caller continues; there is
//! no timeout.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info};

/// Executes external command lines
///
/// The seam between actions and the operating system, so actions can be
/// exercised with a recording double.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command_line` (optionally inside `cwd`) and return its trimmed,
    /// combined output
    ///
    /// # Errors
    /// - [`Error::Spawn`] if the shell could not be started
    /// - [`Error::CommandFailed`] if the command exits non-zero
    async fn run(&self, command_line: &str, cwd: Option<&Utf8Path>) -> Result<String>;

    /// Whether `program` can be found on PATH
    fn is_available(&self, program: &str) -> bool;
}

/// [`CommandRunner`] backed by `sh -c` (`cmd /C` on Windows)
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    flag: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }
}

impl ShellRunner {
    /// Runner using the platform shell
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner using a specific shell program and its "run this string" flag
    pub fn with_shell(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str, cwd: Option<&Utf8Path>) -> Result<String> {
        info!("Running: {}", command_line);

        let mut cmd = Command::new(&self.shell);
        cmd.arg(&self.flag).arg(command_line);
        if let Some(dir) = cwd {
            debug!("Working directory: {}", dir);
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| Error::spawn(command_line, e))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let buffer = Mutex::new(Vec::new());

        let (out_result, err_result, status) = tokio::join!(
            drain(stdout, &buffer),
            drain(stderr, &buffer),
            child.wait()
        );
        out_result?;
        err_result?;
        let status = status?;

        let captured = buffer.into_inner().unwrap_or_else(PoisonError::into_inner);
        let output = String::from_utf8_lossy(&captured).trim().to_string();
        if !output.is_empty() {
            debug!("Output of '{}':\n{}", command_line, output);
        }

        if status.success() {
            debug!("Command succeeded: {}", command_line);
            Ok(output)
        } else {
            // Killed by a signal: no exit code to report
            let code = status.code().unwrap_or(-1);
            debug!("Command exited with {}: {}", code, command_line);
            Err(Error::command_failed(command_line, code, output))
        }
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Quote `arg` for the platform shell used by [`ShellRunner::new`]
///
/// Plain words made of ASCII alphanumerics and `-_.@/:=+,` are returned as-is.
pub fn quote(arg: &str) -> String {
    if cfg!(windows) {
        quote_cmd(arg)
    } else {
        quote_posix(arg)
    }
}

fn is_plain(arg: &str) -> bool {
    !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.@/:=+,".contains(c))
}

/// POSIX `sh`: single quotes, embedded `'` written as `'\''`
pub fn quote_posix(arg: &str) -> String {
    if is_plain(arg) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

/// `cmd /C`: double quotes, embedded `"` doubled
pub fn quote_cmd(arg: &str) -> String {
    if is_plain(arg) {
        arg.to_string()
    } else {
        format!("\"{}\"", arg.replace('"', "\"\""))
    }
}

/// Copy a child stream into the shared buffer until EOF
async fn drain<R>(stream: Option<R>, buffer: &Mutex<Vec<u8>>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let Some(mut stream) = stream else {
        return Ok(());
    };

    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }

        for line in String::from_utf8_lossy(&chunk[..n]).lines() {
            if !line.trim().is_empty() {
                debug!("  | {}", line);
            }
        }

        buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(&chunk[..n]);
    }
}
