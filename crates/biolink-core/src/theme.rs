//! Dark/light display mode with persistence behind a key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::constants::storage::{PREFERENCES_FILE, THEME_KEY};
use crate::error::StorageError;

/// Minimal persistence interface so the theme can live in any backend
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used when persistence is unavailable and in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object on disk (`preferences.json` in the data dir).
/// Every `set` rewrites the file synchronously. Keys written by something
/// else are kept as-is, whatever their JSON type.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(StorageError::Parse),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(StorageError::Read(e)),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking the write
        let mut values = match self.load() {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "replacing unreadable preferences file");
                Map::new()
            }
        };
        values.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StorageError::Write(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Anything other than an explicit "light" means dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Single owner of the process-wide display mode
pub struct ThemeState {
    mode: ThemeMode,
    store: Box<dyn KeyValueStore>,
}

impl ThemeState {
    /// Read the persisted value once. Unreadable storage falls back to dark.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference");
                None
            }
        };
        let mode = ThemeMode::from_stored(stored.as_deref());
        tracing::debug!(theme = mode.as_str(), "theme loaded");
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it. The in-memory mode flips even if the
    /// write fails; the error is returned for display.
    pub fn toggle(&mut self) -> Result<ThemeMode, StorageError> {
        self.mode = self.mode.toggled();
        self.store.set(THEME_KEY, self.mode.as_str())?;
        Ok(self.mode)
    }
}
