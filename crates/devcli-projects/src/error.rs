//! Error types for devcli-projects

use thiserror::Error;

/// Result type alias using devcli-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project action error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target project directory already exists
    #[error("Directory {path} already exists")]
    DirectoryExists { path: String },

    /// Target boilerplate file already exists
    #[error("File {path} already exists")]
    FileExists { path: String },

    /// Unknown project type
    #[error("Unknown project type '{project_type}'. Supported project types: {available}")]
    UnknownProjectType {
        project_type: String,
        available: String,
    },

    /// Unknown boilerplate file type
    #[error("Unknown file type '{file_type}'. Supported file types: {available}")]
    UnknownFileType {
        file_type: String,
        available: String,
    },

    /// Name unusable as a single path component
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Required external tool is not on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// No clone URL was obtained for the remote repository
    #[error("No clone URL available for repository '{name}'")]
    MissingCloneUrl { name: String },

    /// External process failed
    #[error(transparent)]
    Process(#[from] devcli_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a directory exists error
    pub fn directory_exists(path: impl Into<String>) -> Self {
        Self::DirectoryExists { path: path.into() }
    }

    /// Create a file exists error
    pub fn file_exists(path: impl Into<String>) -> Self {
        Self::FileExists { path: path.into() }
    }

    /// Create an unknown project type error
    pub fn unknown_project_type(
        project_type: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self::UnknownProjectType {
            project_type: project_type.into(),
            available: available.into(),
        }
    }

    /// Create an unknown file type error
    pub fn unknown_file_type(file_type: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownFileType {
            file_type: file_type.into(),
            available: available.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a missing clone URL error
    pub fn missing_clone_url(name: impl Into<String>) -> Self {
        Self::MissingCloneUrl { name: name.into() }
    }

    /// Whether the error means the target was already present
    ///
    /// These are reported and skipped rather than failing the process.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::DirectoryExists { .. } | Self::FileExists { .. })
    }
}
