use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use stories_engine::{AtomicFileWriter, KeyValueStore, PersistError};
use stories_logging::{stories_info, stories_warn};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedStore {
    entries: BTreeMap<String, String>,
}

/// Key-value store backed by a single RON file, rewritten atomically on every set.
pub struct RonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl RonFileStore {
    /// Loads `path`; a missing or unreadable file starts an empty store.
    pub fn open(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), PersistError> {
        let state = PersistedStore {
            entries: entries.clone(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&state, pretty)
            .map_err(|err| PersistError::Encode(err.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PersistError::StoreDir(format!("invalid store path {:?}", self.path)))?;

        AtomicFileWriter::new(dir).write(filename, &content)?;
        Ok(())
    }
}

impl KeyValueStore for RonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| PersistError::Encode(err.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            stories_warn!("Failed to read store from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    match ron::from_str::<PersistedStore>(&content) {
        Ok(state) => {
            stories_info!("Loaded {} stored value(s) from {:?}", state.entries.len(), path);
            state.entries
        }
        Err(err) => {
            stories_warn!("Failed to parse store from {:?}: {}", path, err);
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = RonFileStore::open(temp.path().join("absent.ron"));

        assert_eq!(store.get("search"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("store.ron");

        let store = RonFileStore::open(path.clone());
        store.set("search", "rust").unwrap();
        store.set("search", "tokio").unwrap();

        let reopened = RonFileStore::open(path);
        assert_eq!(reopened.get("search").as_deref(), Some("tokio"));
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.ron");
        fs::write(&path, "this is not ron (").unwrap();

        let store = RonFileStore::open(path.clone());
        assert_eq!(store.get("search"), None);

        store.set("search", "fresh").unwrap();
        assert_eq!(RonFileStore::open(path).get("search").as_deref(), Some("fresh"));
    }
}
