//! Sync toggles read from `y`/`n` environment variables

use crate::error::{Result, SyncerError};
use tooling::config::{get_env, parse_yes_no, EnvSource};
use tooling::ToolingError;
use tracing::debug;

/// A feature switch of the sync engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    SyncWatchlist,
    SyncRatings,
    SyncReviews,
    RemoveWatchedFromWatchlists,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [
        Toggle::SyncWatchlist,
        Toggle::SyncRatings,
        Toggle::SyncReviews,
        Toggle::RemoveWatchedFromWatchlists,
    ];

    /// Name of the environment variable holding this toggle
    pub fn env_var(self) -> &'static str {
        match self {
            Toggle::SyncWatchlist => "sync_watchlist",
            Toggle::SyncRatings => "sync_ratings",
            Toggle::SyncReviews => "sync_reviews",
            Toggle::RemoveWatchedFromWatchlists => "remove_watched_from_watchlists",
        }
    }
}

/// Read a required `y`/`n` environment variable
///
/// * unset → [`SyncerError::MissingEnvVar`]
/// * `y`/`Y` → `true`, `n`/`N` → `false`
/// * anything else → [`SyncerError::InvalidEnvVarValue`]
pub fn load_boolean_toggle(env: &impl EnvSource, name: &str) -> Result<bool> {
    let value = match get_env(env, name) {
        Ok(Some(value)) => value,
        Ok(None) => {
            return Err(SyncerError::MissingEnvVar {
                name: name.to_string(),
            })
        }
        Err(ToolingError::NotUnicode(_)) => {
            return Err(SyncerError::InvalidEnvVarValue {
                name: name.to_string(),
                value: "<non-UTF-8>".to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let enabled = parse_yes_no(&value).map_err(|_| SyncerError::InvalidEnvVarValue {
        name: name.to_string(),
        value,
    })?;

    debug!(toggle = name, enabled, "Loaded toggle");
    Ok(enabled)
}

/// All sync toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncToggles {
    pub sync_watchlist: bool,
    pub sync_ratings: bool,
    pub sync_reviews: bool,
    pub remove_watched_from_watchlists: bool,
}

impl SyncToggles {
    /// Read every toggle, failing on the first missing or invalid one
    ///
    /// Order: watchlist, ratings, remove-watched, reviews.
    pub fn from_env(env: &impl EnvSource) -> Result<Self> {
        let sync_watchlist = load_boolean_toggle(env, Toggle::SyncWatchlist.env_var())?;
        let sync_ratings = load_boolean_toggle(env, Toggle::SyncRatings.env_var())?;
        let remove_watched_from_watchlists =
            load_boolean_toggle(env, Toggle::RemoveWatchedFromWatchlists.env_var())?;
        let sync_reviews = load_boolean_toggle(env, Toggle::SyncReviews.env_var())?;

        Ok(Self {
            sync_watchlist,
            sync_ratings,
            sync_reviews,
            remove_watched_from_watchlists,
        })
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::SyncWatchlist => self.sync_watchlist,
            Toggle::SyncRatings => self.sync_ratings,
            Toggle::SyncReviews => self.sync_reviews,
            Toggle::RemoveWatchedFromWatchlists => self.remove_watched_from_watchlists,
        }
    }
}
