//! One-shot configuration bootstrap
//!
//! Called once by the entry point. Everything that used to happen as a side
//! effect of loading the configuration module happens here, explicitly, and
//! ends up in a [`SyncerConfig`].

use crate::credentials::{load_credentials, Credentials};
use crate::error::Result;
use crate::report::{ErrorReporter, ReportExt, TracingReporter};
use crate::settings::SettingsStore;
use crate::throttle::ThrottleWindow;
use crate::toggles::{SyncToggles, Toggle};
use std::path::PathBuf;
use tooling::config::EnvSource;
use tracing::info;

/// Validated configuration handed to the sync engine
#[derive(Debug)]
pub struct SyncerConfig {
    pub settings_path: PathBuf,
    pub credentials: Credentials,
    pub toggles: SyncToggles,
}

/// Inputs of the bootstrap: settings location, environment, error sink
pub struct Bootstrap<E> {
    store: SettingsStore,
    env: E,
    reporter: Box<dyn ErrorReporter>,
}

impl<E: EnvSource> Bootstrap<E> {
    /// Bootstrap reporting errors through [`TracingReporter`]
    pub fn new(store: SettingsStore, env: E) -> Self {
        Self {
            store,
            env,
            reporter: Box::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Load credentials and toggles
    ///
    /// Prints where the settings file lives, then fails on the first
    /// configuration problem after forwarding it to the reporter.
    pub fn load(&self) -> Result<SyncerConfig> {
        println!("Your settings are saved at:\n{}", self.store.dir().display());

        let credentials = load_credentials(&self.store, &self.env).reported(&*self.reporter)?;
        let toggles = SyncToggles::from_env(&self.env).reported(&*self.reporter)?;

        for toggle in Toggle::ALL {
            info!(toggle = toggle.env_var(), enabled = toggles.get(toggle), "Sync toggle");
        }
        info!(path = %self.store.path().display(), "Configuration loaded");

        Ok(SyncerConfig {
            settings_path: self.store.path().to_path_buf(),
            credentials,
            toggles,
        })
    }

    /// Evaluate the IMDb reviews throttle, reporting failures
    pub fn check_imdb_reviews_window(&self) -> Result<bool> {
        ThrottleWindow::imdb_reviews(&self.store)
            .check()
            .reported(&*self.reporter)
    }
}
