//! Forwarding of configuration errors to a central reporter

use crate::error::{Result, SyncerError};
use tooling::error::format_error_chain;
use tracing::error;

/// Receives every configuration error before it propagates
pub trait ErrorReporter {
    fn report(&self, error: &SyncerError);
}

/// Emits errors as `tracing` events, including the source chain
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, err: &SyncerError) {
        error!(kind = err.kind(), "{}", format_error_chain(err));
    }
}

/// Report the error, if any, and hand the result back unchanged
pub trait ReportExt<T> {
    fn reported(self, reporter: &dyn ErrorReporter) -> Result<T>;
}

impl<T> ReportExt<T> for Result<T> {
    fn reported(self, reporter: &dyn ErrorReporter) -> Result<T> {
        if let Err(e) = &self {
            reporter.report(e);
        }
        self
    }
}
