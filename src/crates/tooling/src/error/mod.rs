//! Error handling utilities
//!
//! Walks `source()` chains so reporters can log the full cause of a failure.
//!
//! ```rust
//! use tooling::error::format_error_chain;
//!
//! let err = std::io::Error::new(std::io::ErrorKind::NotFound, "credentials.txt");
//! assert_eq!(format_error_chain(&err), "Error: credentials.txt");
//! ```

mod chain;

pub use chain::format_error_chain;
