//! Durable key/value backends for user preferences.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::rc::Rc;

use dioxus_logger::tracing::warn;
use thiserror::Error;

/// An error raised by a preference storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("preference storage i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The backing file is not a valid key/value document.
    #[error("preference storage file is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// The platform storage (e.g. browser localStorage) refused the operation.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// A synchronous string key/value store, in the style of browser localStorage.
///
/// Methods take `&self`; implementations use interior mutability the way the
/// platform stores they wrap do.
pub trait PrefsStorage {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: PrefsStorage + ?Sized> PrefsStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.0.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl PrefsStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

/// Stores preferences as a JSON object of raw string values in a single file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Name of the preference file inside the data directory.
    pub const FILE_NAME: &'static str = "prefs.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a file storage inside the directory chosen by the environment.
    ///
    /// # Environment Variables
    /// - `POULTRY_DASHBOARD_DATA_DIR`: directory holding `prefs.json`.
    ///
    /// Falls back to `$HOME/.poultry-dashboard`, then the working directory.
    pub fn from_env() -> Self {
        let dir = env::var_os("POULTRY_DASHBOARD_DATA_DIR")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".poultry-dashboard")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads the map for modification. A malformed file is replaced.
    fn read_map_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_map() {
            Err(StorageError::Format(e)) => {
                warn!("discarding malformed preference file {}: {}", self.path.display(), e);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl PrefsStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_state() {
        let storage = MemoryStorage::new();
        let view = storage.clone();
        storage.set("currency", "x").unwrap();
        assert_eq!(view.get("currency").unwrap().as_deref(), Some("x"));
        view.remove("currency").unwrap();
        assert_eq!(storage.raw("currency"), None);
    }

    #[test]
    fn file_storage_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join(FileStorage::FILE_NAME));
        assert_eq!(storage.get("currency").unwrap(), None);
        storage.remove("currency").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join(FileStorage::FILE_NAME);

        FileStorage::new(&path).set("currency", r#"{"code":"USD"}"#).unwrap();
        FileStorage::new(&path).set("theme", "dark").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("currency").unwrap().as_deref(), Some(r#"{"code":"USD"}"#));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));

        reopened.remove("currency").unwrap();
        assert_eq!(FileStorage::new(&path).get("currency").unwrap(), None);
        assert_eq!(FileStorage::new(&path).get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn malformed_file_is_an_error_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStorage::FILE_NAME);
        fs::write(&path, "not-json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("currency"), Err(StorageError::Format(_))));

        storage.set("currency", "v").unwrap();
        assert_eq!(storage.get("currency").unwrap().as_deref(), Some("v"));
    }
}
