//! Environment variable loading utilities
//!
//! Helper functions for loading and parsing environment variables with proper error handling.

use crate::{Result, ToolingError};
use std::collections::HashMap;
use std::env;

/// Source of environment-style key/value pairs
pub trait EnvSource {
    /// Look up `key`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` if variable exists
    /// * `Ok(None)` if variable doesn't exist
    /// * `Err` if variable exists but cannot be represented as a `String`
    fn var(&self, key: &str) -> Result<Option<String>>;
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ToolingError::NotUnicode(key.to_string())),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Result<Option<String>> {
        (**self).var(key)
    }
}

/// Load an environment variable as a string
pub fn get_env(source: &impl EnvSource, key: &str) -> Result<Option<String>> {
    source.var(key)
}

/// Parse a strict yes/no flag
///
/// Only `y` and `n` are accepted, in either case. Whitespace is not trimmed.
///
/// # Example
///
/// ```rust
/// use tooling::config::parse_yes_no;
///
/// assert_eq!(parse_yes_no("N").unwrap(), false);
/// assert!(parse_yes_no("yes").is_err());
/// ```
pub fn parse_yes_no(value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(ToolingError::InvalidFlag {
            value: value.to_string(),
        })
    }
}
