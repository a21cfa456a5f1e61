//! Configuration helpers
//!
//! Environment variables are read through the [`EnvSource`] trait so callers
//! can swap the process environment for a fixed map in tests:
//!
//! ```rust
//! use std::collections::HashMap;
//! use tooling::config::{get_env, parse_yes_no};
//!
//! let mut env = HashMap::new();
//! env.insert("sync_ratings".to_string(), "Y".to_string());
//!
//! let raw = get_env(&env, "sync_ratings").unwrap().unwrap();
//! assert!(parse_yes_no(&raw).unwrap());
//! ```

mod env;

pub use env::{get_env, parse_yes_no, EnvSource, ProcessEnv};
