//! Error types for stagehand
//!
//! All modules use `StagehandResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stagehand operations
pub type StagehandResult<T> = Result<T, StagehandError>;

/// All errors that can occur in stagehand
#[derive(Error, Debug)]
pub enum StagehandError {
    // Buildpack acquisition errors
    #[error("Failed to download buildpack from {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Cannot derive a buildpack name from URL: {0}")]
    BuildpackName(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Staging errors
    #[error("Application directory path must not be empty")]
    EmptyAppDir,

    #[error("Buildpack lifecycle builder exited with code {code}: {stderr}")]
    StagingExecution { code: i32, stderr: String },

    #[error("Staging failed - have you added a buildpack for this type of application?")]
    MissingDroplet,

    #[error("Staging failed - no result json was produced by the matching buildpack!")]
    MissingResultInfo,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StagehandError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a download error
    pub fn download(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingDroplet => Some("Run: stagehand add-buildpack <URL>"),
            Self::Download { .. } => Some("Check the buildpack URL and your network connection"),
            _ => None,
        }
    }
}
