//! # Preference Store
//!
//! Dark mode and color theme, kept as string key-value pairs in a small TOML
//! file and rewritten on every change.
//!
//! ```toml
//! # preferences.toml
//! dark_mode = "true"
//! color_theme = "violet"
//! ```
//!
//! Unreadable or malformed files are logged and treated as empty, so the UI
//! always starts with usable preferences.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mint_core::preferences::{Preferences, PreferencesUpdate, COLOR_THEME_KEY, DARK_MODE_KEY};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Persisted UI preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    current: Arc<RwLock<Preferences>>,
}

impl PreferenceStore {
    /// Loads preferences from `path`, falling back to defaults.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = read_stored(&path).await;
        debug!(?path, ?current, "Preferences loaded");

        PreferenceStore {
            path,
            current: Arc::new(RwLock::new(current)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self) -> Preferences {
        *self.current.read().await
    }

    /// Applies `update` and writes the result to disk.
    ///
    /// The in-memory value only changes once the write succeeded.
    pub async fn update(&self, update: PreferencesUpdate) -> Result<Preferences, PreferenceError> {
        let mut current = self.current.write().await;

        let mut next = *current;
        next.apply(update);
        write_stored(&self.path, &next).await?;

        *current = next;
        info!(dark_mode = next.dark_mode, theme = %next.color_theme.as_str(), "Preferences saved");
        Ok(next)
    }
}

async fn read_stored(path: &Path) -> Preferences {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Preferences::default(),
        Err(e) => {
            warn!(?path, "Failed to read preferences: {}. Using defaults.", e);
            return Preferences::default();
        }
    };

    let table: toml::Table = match contents.parse() {
        Ok(table) => table,
        Err(e) => {
            warn!(?path, "Malformed preferences file: {}. Using defaults.", e);
            return Preferences::default();
        }
    };

    Preferences::from_stored(
        table.get(DARK_MODE_KEY).and_then(|v| v.as_str()),
        table.get(COLOR_THEME_KEY).and_then(|v| v.as_str()),
    )
}

async fn write_stored(path: &Path, prefs: &Preferences) -> Result<(), PreferenceError> {
    let io_err = |source| PreferenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let table: toml::Table = prefs
        .to_stored()
        .into_iter()
        .map(|(key, value)| (key.to_string(), toml::Value::String(value)))
        .collect();
    let contents = toml::to_string(&table)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
    }
    tokio::fs::write(path, contents).await.map_err(io_err)
}
