//! Shared utilities for the syncer workspace
//!
//! # Modules
//!
//! - `config` - Environment variable access and strict flag parsing
//! - `error` - Error chain formatting for reporting

pub mod config;
pub mod error;

use thiserror::Error;

/// Errors that can occur in the tooling crate
#[derive(Debug, Error)]
pub enum ToolingError {
    /// Environment variable is set but is not valid UTF-8
    #[error("Environment variable {0} contains invalid UTF-8")]
    NotUnicode(String),

    /// Value is not one of the accepted `y`/`n` literals
    #[error("Invalid flag value {value:?}, expected y or n")]
    InvalidFlag { value: String },
}

/// Result type for tooling operations
pub type Result<T> = std::result::Result<T, ToolingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolingError::InvalidFlag {
            value: "yes".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid flag value \"yes\", expected y or n");
    }
}
