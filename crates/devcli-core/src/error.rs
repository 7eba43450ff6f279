//! Error types for devcli-core

use thiserror::Error;

/// Result type alias using devcli-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for dev-cli
#[derive(Error, Debug)]
pub enum Error {
    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// The command could not be started at all
    #[error("Failed to start command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited with a non-zero code
    #[error("Command failed with exit code {code}: {output}")]
    CommandFailed {
        command: String,
        code: i32,
        output: String,
    },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, code: i32, output: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
            output: output.into(),
        }
    }
}
