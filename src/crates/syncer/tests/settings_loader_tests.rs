//! Integration tests for credential loading and the bootstrap

mod common;

use secrecy::ExposeSecret;
use std::collections::HashMap;
use syncer::{load_credentials, Bootstrap, SyncerError};

#[test]
fn test_absent_file_is_created_then_rejected() {
    let (_temp, store) = common::setup_store();

    let err = load_credentials(&store, &common::full_env()).unwrap_err();

    assert!(matches!(err, SyncerError::MissingCredential { .. }));
    assert!(err.to_string().contains("Missing Trakt access token or refresh token"));
    assert_eq!(
        common::read_settings(&store),
        r#"{"trakt_access_token":"empty","trakt_refresh_token":"empty"}"#
    );
}

#[test]
fn test_empty_file_is_initialized() {
    let (_temp, store) = common::setup_store_with("");

    let err = load_credentials(&store, &common::full_env()).unwrap_err();

    assert!(matches!(err, SyncerError::MissingCredential { .. }));
    assert_eq!(
        common::read_settings(&store),
        r#"{"trakt_access_token":"empty","trakt_refresh_token":"empty"}"#
    );
}

#[test]
fn test_legacy_file_is_migrated() {
    let (_temp, store) = common::setup_store_with("trakt_client_id=abc\ntrakt_client_secret=def\n");

    // The migrated file carries no tokens yet
    let err = load_credentials(&store, &common::full_env()).unwrap_err();

    assert!(matches!(err, SyncerError::MissingCredential { .. }));
    assert_eq!(
        common::read_settings(&store),
        r#"{"trakt_client_id":"abc","trakt_client_secret":"def"}"#
    );
}

#[test]
fn test_legacy_file_with_tokens_loads() {
    let (_temp, store) = common::setup_store_with(
        "trakt_client_id=abc\ntrakt_client_secret=def\ntrakt_access_token=tok\ntrakt_refresh_token=ref\n",
    );

    let credentials = load_credentials(&store, &HashMap::<String, String>::new()).unwrap();

    assert_eq!(credentials.trakt_access_token.expose_secret(), "tok");
    assert_eq!(credentials.trakt_refresh_token.expose_secret(), "ref");
    assert!(common::read_settings(&store).starts_with('{'));
}

#[test]
fn test_populated_settings_return_exact_values() {
    let (_temp, store) = common::setup_store_with(common::POPULATED_SETTINGS);

    let credentials = load_credentials(&store, &common::full_env()).unwrap();

    assert_eq!(credentials.trakt_client_id.as_deref(), Some("client-id"));
    assert_eq!(
        credentials
            .trakt_client_secret
            .as_ref()
            .map(|s| s.expose_secret().as_str()),
        Some("client-secret")
    );
    assert_eq!(credentials.trakt_access_token.expose_secret(), "access-123");
    assert_eq!(credentials.trakt_refresh_token.expose_secret(), "refresh-456");
    assert_eq!(credentials.imdb_username.as_deref(), Some("imdb-user"));
    assert_eq!(
        credentials
            .imdb_password
            .as_ref()
            .map(|s| s.expose_secret().as_str()),
        Some("imdb-pass")
    );

    // No mutation
    assert_eq!(common::read_settings(&store), common::POPULATED_SETTINGS);
}

#[test]
fn test_malformed_json_falls_back_to_defaults() {
    let (_temp, store) = common::setup_store_with("{\"trakt_access_token\": \"abc\"");

    let err = load_credentials(&store, &common::full_env()).unwrap_err();

    assert!(matches!(err, SyncerError::MissingCredential { .. }));
    // Corrupt file left as-is
    assert_eq!(common::read_settings(&store), "{\"trakt_access_token\": \"abc\"");
}

#[test]
fn test_bootstrap_builds_config() {
    let (_temp, store) = common::setup_store_with(common::POPULATED_SETTINGS);
    let settings_path = store.path().to_path_buf();

    let config = Bootstrap::new(store, common::full_env()).load().unwrap();

    assert_eq!(config.settings_path, settings_path);
    assert!(config.toggles.sync_watchlist);
    assert!(config.toggles.sync_ratings);
    assert!(!config.toggles.sync_reviews);
    assert!(!config.toggles.remove_watched_from_watchlists);
    assert_eq!(config.credentials.imdb_username.as_deref(), Some("imdb-user"));
}

#[test]
fn test_bootstrap_fails_on_missing_toggle() {
    let (_temp, store) = common::setup_store_with(common::POPULATED_SETTINGS);
    let mut env = common::full_env();
    env.remove("remove_watched_from_watchlists");

    let err = Bootstrap::new(store, env).load().unwrap_err();

    assert!(
        matches!(err, SyncerError::MissingEnvVar { ref name } if name == "remove_watched_from_watchlists")
    );
}

#[test]
fn test_bootstrap_fails_on_invalid_toggle() {
    let (_temp, store) = common::setup_store_with(common::POPULATED_SETTINGS);
    let mut env = common::full_env();
    env.insert("sync_reviews".to_string(), "yes".to_string());

    let err = Bootstrap::new(store, env).load().unwrap_err();

    assert!(
        matches!(err, SyncerError::InvalidEnvVarValue { ref name, ref value } if name == "sync_reviews" && value == "yes")
    );
}
