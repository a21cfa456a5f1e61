//! Settings loader for the IMDb/Trakt syncer
//!
//! Loads and validates what the sync engine needs before it starts:
//!
//! - Trakt tokens from the local settings file (`credentials.txt`)
//! - Trakt client and IMDb login values from the environment
//! - `y`/`n` sync toggles from the environment
//! - a throttle gating how often IMDb reviews are submitted
//!
//! ```rust,no_run
//! use syncer::{Bootstrap, SettingsStore};
//! use tooling::config::ProcessEnv;
//!
//! let bootstrap = Bootstrap::new(SettingsStore::beside_executable()?, ProcessEnv);
//! let config = bootstrap.load()?;
//! if config.toggles.sync_reviews && bootstrap.check_imdb_reviews_window()? {
//!     // submit reviews
//! }
//! # Ok::<(), syncer::SyncerError>(())
//! ```

pub mod bootstrap;
pub mod credentials;
pub mod error;
pub mod report;
pub mod settings;
pub mod throttle;
pub mod toggles;

pub use bootstrap::{Bootstrap, SyncerConfig};
pub use credentials::{load_credentials, Credentials};
pub use error::{Result, SyncerError};
pub use report::{ErrorReporter, ReportExt, TracingReporter};
pub use settings::{SettingsDocument, SettingsStore};
pub use throttle::{check_imdb_reviews_window, check_throttle_window, ThrottleWindow};
pub use toggles::{load_boolean_toggle, SyncToggles, Toggle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
