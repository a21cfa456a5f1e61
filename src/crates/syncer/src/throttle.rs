//! Time-based gate for actions that may only run once per window
//!
//! The last-run timestamp lives in the settings file. Opening the gate stamps
//! the current time, so it stays closed for another full window.

use crate::error::Result;
use crate::settings::{SettingsStore, IMDB_REVIEWS_LAST_SUBMITTED_KEY};
use chrono::{Duration, Local, NaiveDateTime};
use tracing::{debug, info};

/// Format of stored timestamps, local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minimum hours between two IMDb review submissions
pub const IMDB_REVIEWS_WINDOW_HOURS: i64 = 240;

/// A throttle backed by one timestamp field of the settings file
#[derive(Debug, Clone)]
pub struct ThrottleWindow<'a> {
    store: &'a SettingsStore,
    field: String,
    window: Duration,
}

impl<'a> ThrottleWindow<'a> {
    pub fn new(store: &'a SettingsStore, field: impl Into<String>, window_hours: i64) -> Self {
        Self {
            store,
            field: field.into(),
            window: Duration::hours(window_hours),
        }
    }

    /// Gate for IMDb review submissions
    pub fn imdb_reviews(store: &'a SettingsStore) -> Self {
        Self::new(
            store,
            IMDB_REVIEWS_LAST_SUBMITTED_KEY,
            IMDB_REVIEWS_WINDOW_HOURS,
        )
    }

    /// Evaluate the gate against the local clock
    pub fn check(&self) -> Result<bool> {
        self.check_at(Local::now().naive_local())
    }

    /// Evaluate the gate as of `now`
    ///
    /// Returns `true` and persists `now` when at least one window has elapsed
    /// since the stored timestamp. A missing or unparsable timestamp counts as
    /// exactly one window ago. Nothing is written when the gate stays closed.
    pub fn check_at(&self, now: NaiveDateTime) -> Result<bool> {
        let mut document = self.store.load_existing()?;

        let last_run = document
            .get_raw(&self.field)
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok())
            .unwrap_or(now - self.window);

        let elapsed = now - last_run;
        if elapsed < self.window {
            debug!(
                field = %self.field,
                elapsed_hours = elapsed.num_hours(),
                window_hours = self.window.num_hours(),
                "Throttle window still closed"
            );
            return Ok(false);
        }

        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        document.set(self.field.clone(), stamp.as_str());
        self.store.save(&document)?;

        info!(field = %self.field, last_run = %stamp, "Throttle window opened");
        Ok(true)
    }
}

/// Check an arbitrary throttle field of the settings file
pub fn check_throttle_window(store: &SettingsStore, field: &str, window_hours: i64) -> Result<bool> {
    ThrottleWindow::new(store, field, window_hours).check()
}

/// Check whether IMDb reviews may be submitted in this run
pub fn check_imdb_reviews_window(store: &SettingsStore) -> Result<bool> {
    ThrottleWindow::imdb_reviews(store).check()
}
