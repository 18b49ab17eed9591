//! Session-scoped string storage
//!
//! A session store survives a page reload or navigation within one browsing
//! session, but not the end of that session. Two backends are provided:
//!
//! - [`MemorySessionStore`] keeps values in a map owned by the caller, which
//!   hands the store from one page load to the next.
//! - [`FileSessionStore`] keeps values in a JSON file, so separate processes
//!   sharing the path see each other's writes. [`FileSessionStore::end_session`]
//!   deletes the file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// String key/value storage scoped to one browsing session
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        (**self).remove(key)
    }
}

/// Errors produced by session store backends
#[derive(Debug)]
pub enum SessionError {
    /// Reading or writing the backing file failed
    IoError(String),
    /// The backing file does not contain a string map
    Corrupt(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::IoError(e) => write!(f, "Session storage IO error: {}", e),
            SessionError::Corrupt(e) => write!(f, "Session storage is corrupt: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Session store persisted as a JSON object in a single file
///
/// Every operation re-reads the file, so the store never serves values that
/// another process already consumed.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End the browsing session, discarding everything stored in it.
    pub fn end_session(self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("ended session at {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::IoError(err.to_string())),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(SessionError::IoError(err.to_string())),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| SessionError::Corrupt(e.to_string()))
    }

    /// Like `read_all`, but a corrupt file counts as empty so the next write
    /// replaces it. The flag tells whether that happened.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool), SessionError> {
        match self.read_all() {
            Ok(values) => Ok((values, false)),
            Err(SessionError::Corrupt(e)) => {
                warn!("Overwriting corrupt session file {}: {}", self.path.display(), e);
                Ok((BTreeMap::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if values.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => {
                    Err(SessionError::IoError(err.to_string()))
                }
                _ => Ok(()),
            };
        }

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| SessionError::IoError(e.to_string()))?;

        let json =
            serde_json::to_string(values).map_err(|e| SessionError::Corrupt(e.to_string()))?;

        // Write to a sibling and rename so readers never see a partial file
        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| SessionError::IoError(e.to_string()))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| SessionError::IoError(e.to_string()))?;
        tmp.persist(&self.path).map_err(|e| {
            warn!("Failed to replace session file {}: {}", self.path.display(), e);
            SessionError::IoError(e.to_string())
        })?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let (mut values, _) = self.read_for_write()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        let (mut values, corrupt) = self.read_for_write()?;
        if values.remove(key).is_none() && !corrupt {
            return Ok(());
        }
        self.write_all(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemorySessionStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_shared_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut writer = FileSessionStore::open(&path);
        let reader = FileSessionStore::open(&path);

        writer.set("toast:message", "Hotovo").unwrap();
        assert_eq!(reader.get("toast:message").unwrap().as_deref(), Some("Hotovo"));
    }

    #[test]
    fn test_file_store_removes_file_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileSessionStore::open(&path);

        store.set("k", "v").unwrap();
        assert!(path.exists());

        store.remove("k").unwrap();
        assert!(!path.exists());
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_end_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let mut store = FileSessionStore::open(&path);
        store.set("k", "v").unwrap();

        store.clone().end_session().unwrap();
        assert!(!path.exists());
        // Ending twice is harmless
        store.end_session().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut store = FileSessionStore::open(&path);
        assert!(matches!(store.get("k"), Err(SessionError::Corrupt(_))));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_remove_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{{{").unwrap();

        let mut store = FileSessionStore::open(&path);
        store.remove("absent").unwrap();
        assert!(!path.exists());
    }
}
