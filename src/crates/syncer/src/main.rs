//! syncer - non-interactive configuration bootstrap
//!
//! Validates settings and environment, then reports whether the IMDb
//! reviews window is open for this run.

use clap::Parser;
use secrecy::ExposeSecret;
use std::path::PathBuf;
use syncer::{Bootstrap, Result, SettingsStore};
use tooling::config::ProcessEnv;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "syncer")]
#[command(version = syncer::VERSION)]
#[command(about = "Validate IMDb/Trakt syncer configuration", long_about = None)]
struct Args {
    /// Directory holding credentials.txt (defaults to the executable's directory)
    #[arg(long, env = "SYNCER_SETTINGS_DIR", value_name = "DIR")]
    settings_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let store = match args.settings_dir {
        Some(dir) => SettingsStore::in_dir(dir),
        None => SettingsStore::beside_executable()?,
    };

    let bootstrap = Bootstrap::new(store, ProcessEnv);
    let config = bootstrap.load()?;

    let credentials = &config.credentials;
    info!(
        settings = %config.settings_path.display(),
        trakt_client_id = credentials.trakt_client_id.is_some(),
        trakt_client_secret = credentials.trakt_client_secret.is_some(),
        trakt_access_token_len = credentials.trakt_access_token.expose_secret().len(),
        imdb_username = credentials.imdb_username.as_deref().unwrap_or("<unset>"),
        imdb_password = credentials.imdb_password.is_some(),
        "Credentials ready"
    );

    if config.toggles.sync_reviews {
        let open = bootstrap.check_imdb_reviews_window()?;
        info!(open, "IMDb reviews submission window");
    }

    Ok(())
}
