//! Persisted settings file
//!
//! The settings file (`credentials.txt`, JSON despite the name) lives next to
//! the executable and holds the Trakt tokens written by the authorization step
//! plus the throttle timestamp. Files written by older releases use a
//! `key=value` per line layout and are upgraded in place on first load.

mod document;
mod legacy;
mod store;

pub use document::SettingsDocument;
pub use legacy::{is_legacy_format, parse_legacy};
pub use store::SettingsStore;

/// File name of the settings file
pub const SETTINGS_FILE_NAME: &str = "credentials.txt";

/// On-disk marker for a value that has not been provided yet
pub const SENTINEL: &str = "empty";

/// Trakt OAuth access token
pub const ACCESS_TOKEN_KEY: &str = "trakt_access_token";

/// Trakt OAuth refresh token
pub const REFRESH_TOKEN_KEY: &str = "trakt_refresh_token";

/// Last time IMDb reviews were submitted, `YYYY-MM-DD HH:MM:SS`
pub const IMDB_REVIEWS_LAST_SUBMITTED_KEY: &str = "imdb_reviews_last_submitted_date";
