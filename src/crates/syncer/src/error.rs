//! Error types for the settings loader

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading syncer configuration
#[derive(Debug, Error)]
pub enum SyncerError {
    /// Trakt tokens have not been written to the settings file yet
    #[error(
        "Missing Trakt access token or refresh token ({keys}). Please provide a value in {path} for the non-interactive version to work."
    )]
    MissingCredential { keys: String, path: PathBuf },

    /// Required environment variable is not set
    #[error(
        "Missing value for {name}. Please set the {name} environment variable for the non-interactive version to work."
    )]
    MissingEnvVar { name: String },

    /// Environment variable is set but is not `y` or `n`
    #[error("Fix the {name} environment variable please. It should be either y or n (got {value:?}).")]
    InvalidEnvVarValue { name: String, value: String },

    /// Settings file exists but does not hold a JSON object
    #[error("Settings file {path} is not valid JSON: {source}")]
    MalformedSettingsFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error on the settings file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Shared utility error
    #[error(transparent)]
    Tooling(#[from] tooling::ToolingError),
}

impl SyncerError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SyncerError::MissingCredential { .. } => "missing_credential",
            SyncerError::MissingEnvVar { .. } => "missing_env_var",
            SyncerError::InvalidEnvVarValue { .. } => "invalid_env_var_value",
            SyncerError::MalformedSettingsFile { .. } => "malformed_settings_file",
            SyncerError::Io { .. } => "io",
            SyncerError::Serialization(_) => "serialization",
            SyncerError::Tooling(_) => "tooling",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for syncer operations
pub type Result<T> = std::result::Result<T, SyncerError>;
