//! Snapshot persistence
//!
//! Each widget stores one snapshot under a fixed key in a key-value store.
//! Snapshots are JSON documents; a missing or unreadable snapshot is replaced
//! by the type's default and never reported to the user.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key of the Pomodoro snapshot
pub const POMODORO_KEY: &str = "pomodoroData";

/// Key of the to-do snapshot
pub const TODO_KEY: &str = "todoTasks";

/// Decode a stored wall-clock time
///
/// RFC 3339 text is taken as is. Anything else, such as a browser's
/// locale-formatted date, is replaced by `fallback_millis`, the epoch
/// milliseconds every stored record carries next to its time text.
pub(crate) fn stored_time(raw: &str, fallback_millis: i64) -> DateTime<Local> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => time.with_timezone(&Local),
        Err(_) => {
            debug!("unrecognized stored time '{raw}', using {fallback_millis} ms");
            Local
                .timestamp_millis_opt(fallback_millis)
                .single()
                .unwrap_or_default()
        }
    }
}

/// A string-to-string store addressed by fixed keys
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores every key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// In-process store, used for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that already holds one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed snapshot access on top of a [`KeyValueStore`]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the snapshot stored under `key`
    ///
    /// # Returns
    /// The decoded snapshot, or `T::default()` when nothing is stored or the
    /// stored document cannot be decoded. Only store I/O failures are errors.
    pub fn load<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(content) = self.store.get(key)? else {
            debug!("no snapshot under '{key}', starting from defaults");
            return Ok(T::default());
        };

        match serde_json::from_str(&content) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!("discarding malformed snapshot under '{key}': {e}");
                Ok(T::default())
            }
        }
    }

    /// Overwrite the snapshot stored under `key`
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)
            .with_context(|| format!("Failed to encode snapshot '{key}'"))?;
        self.store.set(key, &content)?;
        debug!("saved snapshot '{key}'");
        Ok(())
    }
}
