//! Key/value storage backends for drafts

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Failure of the underlying storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
    #[error("storage is unavailable")]
    Unavailable,
}

/// Minimal string key/value contract, one value per key
#[cfg_attr(test, mockall::automock)]
pub trait DraftStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Per-user data directory for this application
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "leadcapture", "lead-capture")
            .map(|dirs| dirs.data_dir().join("drafts"))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DraftStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local storage, used when no data directory exists
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl DraftStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod file_storage {
        use super::*;

        #[test]
        fn test_missing_key_is_none() {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStorage::new(dir.path());
            assert!(storage.get("leadFormDraft").unwrap().is_none());
        }

        #[test]
        fn test_set_get_remove() {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStorage::new(dir.path().join("nested"));

            storage.set("leadFormDraft", "{}").unwrap();
            assert_eq!(storage.get("leadFormDraft").unwrap().as_deref(), Some("{}"));
            assert!(dir.path().join("nested/leadFormDraft.json").exists());

            storage.remove("leadFormDraft").unwrap();
            assert!(storage.get("leadFormDraft").unwrap().is_none());
        }

        #[test]
        fn test_remove_missing_is_ok() {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStorage::new(dir.path());
            assert!(storage.remove("leadFormDraft").is_ok());
        }

        #[test]
        fn test_rejects_path_like_keys() {
            let dir = tempfile::tempdir().unwrap();
            let storage = FileStorage::new(dir.path());
            assert!(matches!(
                storage.set("../escape", "x"),
                Err(StorageError::InvalidKey(_))
            ));
            assert!(matches!(storage.get(""), Err(StorageError::InvalidKey(_))));
        }

        #[test]
        fn test_default_dir_returns_option() {
            // Just make sure the lookup does not panic
            let _dir = FileStorage::default_dir();
        }
    }

    mod memory_storage {
        use super::*;

        #[test]
        fn test_round_trip() {
            let storage = MemoryStorage::default();
            storage.set("k", "v").unwrap();
            assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
            storage.remove("k").unwrap();
            assert!(storage.get("k").unwrap().is_none());
        }
    }
}
