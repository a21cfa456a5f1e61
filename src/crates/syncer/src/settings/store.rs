//! Settings file access

use super::legacy::{is_legacy_format, parse_legacy};
use super::{SettingsDocument, SETTINGS_FILE_NAME};
use crate::error::{Result, SyncerError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Handle on the settings file at a fixed location
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Settings file at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `credentials.txt` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SETTINGS_FILE_NAME))
    }

    /// `credentials.txt` next to the running executable
    pub fn beside_executable() -> Result<Self> {
        let exe =
            std::env::current_exe().map_err(|e| SyncerError::io("<current executable>", e))?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::in_dir(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the settings file
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Create the file with default values if it is missing or empty
    ///
    /// Returns `true` when the file was (re)created.
    pub fn ensure_initialized(&self) -> Result<bool> {
        let needs_defaults = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(SyncerError::io(&self.path, e)),
        };

        if needs_defaults {
            self.save(&SettingsDocument::defaults())?;
            info!(path = %self.path.display(), "Created settings file with default values");
        }

        Ok(needs_defaults)
    }

    /// Rewrite a legacy `key=value` file as JSON
    ///
    /// Returns `true` when a migration happened. A missing file is left alone.
    pub fn migrate_legacy(&self) -> Result<bool> {
        let Some(bytes) = self.read()? else {
            return Ok(false);
        };

        let contents = String::from_utf8_lossy(&bytes);
        if !is_legacy_format(&contents) {
            return Ok(false);
        }

        let document = SettingsDocument::from(parse_legacy(&contents));
        self.save(&document)?;

        println!(
            "Warning: You are using a deprecated {} file.\nConversion successful: {} file converted to the new JSON format.",
            SETTINGS_FILE_NAME, SETTINGS_FILE_NAME
        );
        warn!(
            path = %self.path.display(),
            keys = document.len(),
            "Migrated legacy key=value settings file to JSON"
        );

        Ok(true)
    }

    /// Load the file, substituting defaults when it is not valid JSON
    ///
    /// The file on disk is not touched when the fallback is taken.
    pub fn load_or_default(&self) -> Result<SettingsDocument> {
        let bytes = self.read()?.unwrap_or_default();

        match SettingsDocument::from_json(&bytes) {
            Ok(document) => Ok(document),
            Err(e) => {
                let error = SyncerError::MalformedSettingsFile {
                    path: self.path.clone(),
                    source: e,
                };
                warn!(error = %error, "Falling back to default settings");
                Ok(SettingsDocument::defaults())
            }
        }
    }

    /// Load the file if present, an empty document otherwise
    ///
    /// A zero-length file counts as absent. Never creates the file. Invalid
    /// JSON is an error here since the caller is about to write the document
    /// back.
    pub fn load_existing(&self) -> Result<SettingsDocument> {
        let Some(bytes) = self.read()?.filter(|bytes| !bytes.is_empty()) else {
            debug!(path = %self.path.display(), "Settings file missing or empty");
            return Ok(SettingsDocument::default());
        };

        SettingsDocument::from_json(&bytes).map_err(|e| SyncerError::MalformedSettingsFile {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Persist `document`, replacing the file atomically
    pub fn save(&self, document: &SettingsDocument) -> Result<()> {
        let json = document.to_json()?;
        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, json).map_err(|e| SyncerError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| SyncerError::io(&self.path, e))?;

        debug!(path = %self.path.display(), keys = document.len(), "Saved settings file");
        Ok(())
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SyncerError::io(&self.path, e)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
