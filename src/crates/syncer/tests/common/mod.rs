//! Common test utilities and setup

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use syncer::SettingsStore;
use tempfile::TempDir;

pub const POPULATED_SETTINGS: &str =
    r#"{"trakt_access_token":"access-123","trakt_refresh_token":"refresh-456"}"#;

/// Create a settings store in a fresh temporary directory
pub fn setup_store() -> (TempDir, SettingsStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::in_dir(temp_dir.path());
    (temp_dir, store)
}

/// Create a settings store whose file holds `contents`
pub fn setup_store_with(contents: &str) -> (TempDir, SettingsStore) {
    let (temp_dir, store) = setup_store();
    fs::write(store.path(), contents).expect("Failed to write settings file");
    (temp_dir, store)
}

pub fn read_settings(store: &SettingsStore) -> String {
    fs::read_to_string(store.path()).expect("Failed to read settings file")
}

/// Environment with every credential and toggle set
pub fn full_env() -> HashMap<String, String> {
    env_of(&[
        ("trakt_client_id", "client-id"),
        ("trakt_client_secret", "client-secret"),
        ("imdb_username", "imdb-user"),
        ("imdb_password", "imdb-pass"),
        ("sync_watchlist", "y"),
        ("sync_ratings", "Y"),
        ("sync_reviews", "n"),
        ("remove_watched_from_watchlists", "N"),
    ])
}

pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
