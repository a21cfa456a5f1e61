//! Trakt and IMDb credentials
//!
//! Tokens come from the settings file, where an external authorization step
//! has written them. Client id/secret and IMDb login come from the
//! environment and are passed through unvalidated.

use crate::error::{Result, SyncerError};
use crate::settings::{SettingsStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use secrecy::Secret;
use tooling::config::{get_env, EnvSource};
use tooling::ToolingError;
use tracing::{debug, info, warn};

pub const TRAKT_CLIENT_ID_VAR: &str = "trakt_client_id";
pub const TRAKT_CLIENT_SECRET_VAR: &str = "trakt_client_secret";
pub const IMDB_USERNAME_VAR: &str = "imdb_username";
pub const IMDB_PASSWORD_VAR: &str = "imdb_password";

/// Credentials handed to the sync engine
#[derive(Debug)]
pub struct Credentials {
    pub trakt_client_id: Option<String>,
    pub trakt_client_secret: Option<Secret<String>>,
    pub trakt_access_token: Secret<String>,
    pub trakt_refresh_token: Secret<String>,
    pub imdb_username: Option<String>,
    pub imdb_password: Option<Secret<String>>,
}

/// Load the credential bundle
///
/// Creates the settings file with unset tokens if it does not exist and
/// upgrades legacy `key=value` files. Fails with
/// [`SyncerError::MissingCredential`] until both Trakt tokens are populated.
pub fn load_credentials(store: &SettingsStore, env: &impl EnvSource) -> Result<Credentials> {
    store.ensure_initialized()?;
    store.migrate_legacy()?;
    let document = store.load_or_default()?;

    let mut unset: Vec<&str> = document.unset_keys();
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
        if !document.contains_key(key) {
            unset.push(key);
        }
    }

    if !unset.is_empty() {
        return Err(missing_credential(store, &unset));
    }

    // Present but not strings
    let (Some(access_token), Some(refresh_token)) = (
        document.get(ACCESS_TOKEN_KEY),
        document.get(REFRESH_TOKEN_KEY),
    ) else {
        return Err(missing_credential(store, &[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]));
    };

    let credentials = Credentials {
        trakt_client_id: opaque_env(env, TRAKT_CLIENT_ID_VAR)?,
        trakt_client_secret: opaque_env(env, TRAKT_CLIENT_SECRET_VAR)?.map(Secret::new),
        trakt_access_token: Secret::new(access_token.to_string()),
        trakt_refresh_token: Secret::new(refresh_token.to_string()),
        imdb_username: opaque_env(env, IMDB_USERNAME_VAR)?,
        imdb_password: opaque_env(env, IMDB_PASSWORD_VAR)?.map(Secret::new),
    };

    for (name, present) in [
        (TRAKT_CLIENT_ID_VAR, credentials.trakt_client_id.is_some()),
        (TRAKT_CLIENT_SECRET_VAR, credentials.trakt_client_secret.is_some()),
        (IMDB_USERNAME_VAR, credentials.imdb_username.is_some()),
        (IMDB_PASSWORD_VAR, credentials.imdb_password.is_some()),
    ] {
        if !present {
            debug!(variable = name, "Credential environment variable not set");
        }
    }

    info!(path = %store.path().display(), "Loaded Trakt tokens from settings file");
    Ok(credentials)
}

/// Unvalidated pass-through read; an unreadable value counts as unset
fn opaque_env(env: &impl EnvSource, name: &str) -> Result<Option<String>> {
    match get_env(env, name) {
        Ok(value) => Ok(value),
        Err(ToolingError::NotUnicode(_)) => {
            warn!(variable = name, "Ignoring credential variable with invalid UTF-8");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn missing_credential(store: &SettingsStore, keys: &[&str]) -> SyncerError {
    SyncerError::MissingCredential {
        keys: keys.join(", "),
        path: store.path().to_path_buf(),
    }
}
