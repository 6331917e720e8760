//! Persisted user preferences.
//!
//! Podium remembers one thing between runs: the theme picked inside the
//! TUI. The value lives in a small JSON file under the platform config
//! directory (`~/.config/podium/preferences.json` on Linux), or wherever
//! `PODIUM_PREFERENCES_PATH` points. When the disk is unavailable the
//! store degrades to an in-memory one so the demo keeps running.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Overrides the preferences file location.
pub const PREFERENCES_PATH_ENV: &str = "PODIUM_PREFERENCES_PATH";

const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when the preferences file cannot be read or written.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("preferences encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the preferences file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical id of the last theme chosen in the TUI.
    pub preferred_theme: Option<String>,
}

/// JSON-backed preference store.
///
/// The runtime owns exactly one store, so mutation goes through `&mut self`
/// and there is no interior locking. Every setter writes the file right
/// away; there is no separate flush step to forget.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: PreferencesPayload,
    in_memory: bool,
}

impl UserPreferences {
    /// Opens the store at the default location, honoring the
    /// `PODIUM_PREFERENCES_PATH` override.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::with_path(default_preferences_path())
    }

    /// Opens the store at an explicit path.
    ///
    /// A missing file is not an error, and an unreadable payload is treated
    /// as empty; only I/O failures beyond "not found" propagate.
    pub fn with_path(path: PathBuf) -> Result<Self, PreferencesError> {
        let payload = read_payload(&path)?;
        Ok(Self {
            path,
            payload,
            in_memory: false,
        })
    }

    /// A store that never touches the disk, for when the config directory
    /// is unavailable.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: PreferencesPayload::default(),
            in_memory: true,
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted theme id, if any.
    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.preferred_theme.clone()
    }

    /// Records (or clears) the preferred theme and writes the file.
    pub fn set_preferred_theme(&mut self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.payload.preferred_theme = theme_id;
        self.save()
    }

    fn save(&self) -> Result<(), PreferencesError> {
        if self.in_memory {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.payload)?)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    match env::var(PREFERENCES_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => expand_tilde(path.trim()),
        _ => config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("podium")
            .join(PREFERENCES_FILE_NAME),
    }
}

fn read_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(PreferencesPayload::default()),
        Err(error) => return Err(error.into()),
    };
    match serde_json::from_str(&data) {
        Ok(payload) => Ok(payload),
        Err(error) => {
            warn!(path = %path.display(), error = %error, "unreadable preferences file, starting from defaults");
            Ok(PreferencesPayload::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn theme_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);

        let mut store = UserPreferences::with_path(path.clone()).unwrap();
        store.set_preferred_theme(Some("midnight".into())).unwrap();
        drop(store);

        let reloaded = UserPreferences::with_path(path).unwrap();
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("midnight"));
    }

    #[test]
    fn clearing_theme_persists_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);

        let mut store = UserPreferences::with_path(path.clone()).unwrap();
        store.set_preferred_theme(Some("paper".into())).unwrap();
        store.set_preferred_theme(None).unwrap();
        drop(store);

        let reloaded = UserPreferences::with_path(path).unwrap();
        assert_eq!(reloaded.preferred_theme(), None);
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(PREFERENCES_FILE_NAME);

        let mut store = UserPreferences::with_path(path.clone()).unwrap();
        store.set_preferred_theme(Some("paper".into())).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let store = UserPreferences::with_path(path).unwrap();
        assert_eq!(store.preferred_theme(), None);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store = UserPreferences::with_path(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.preferred_theme(), None);
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("~/custom/prefs.json"), || {
            let path = default_preferences_path();
            assert_eq!(path, expand_tilde("~/custom/prefs.json"));
        });
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let mut store = UserPreferences::ephemeral();
        store.set_preferred_theme(Some("midnight".into())).unwrap();
        assert_eq!(store.preferred_theme().as_deref(), Some("midnight"));
        assert_eq!(store.path(), Path::new(""));
    }
}
