//! File-backed key-value store.
//!
//! The whole key map lives in one JSON file, mirroring an origin-scoped
//! browser store: small, synchronous, rewritten wholesale on every write.
//! Writes go through a temporary file plus rename so the backing file is
//! never observed half-written.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};

use ss_core::errors::{DomainError, DomainResult};
use ss_core::store::KeyValueStore;
use ss_shared::StorageConfig;

use crate::InfrastructureError;

/// File-backed implementation of [`KeyValueStore`]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing contents
    ///
    /// A missing file is a fresh, empty store; a malformed file is a
    /// configuration error rather than data silently discarded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                InfrastructureError::Config(format!(
                    "backing file {} is not a valid key map: {e}",
                    path.display()
                ))
            })?
        } else {
            HashMap::new()
        };

        info!(path = %path.display(), keys = entries.len(), "file store opened");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Open the store configured by [`StorageConfig`]
    pub fn from_config(config: &StorageConfig) -> Result<Self, InfrastructureError> {
        Self::open(&config.data_file)
    }

    fn persist(&self, entries: &HashMap<String, String>) -> DomainResult<()> {
        let serialized = serde_json::to_string(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serialized)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| DomainError::storage(format!("write {}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), "file store persisted");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path(tag: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "skillshare_store_{}_{}_{}.json",
            tag,
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let path = temp_path("fresh");
        let store = FileStore::open(&path).unwrap();
        assert!(store.get("anything").unwrap().is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        {
            let store = FileStore::open(&path).unwrap();
            store.set("skillshare_users", "[]").unwrap();
            store.set("greeting", "hello").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
        assert_eq!(store.get("skillshare_users").unwrap().as_deref(), Some("[]"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_persists() {
        let path = temp_path("remove");
        {
            let store = FileStore::open(&path).unwrap();
            store.set("k", "v").unwrap();
            store.remove("k").unwrap();
            // Removing an absent key stays a no-op
            store.remove("k").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("k").unwrap().is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_backing_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not a key map").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_from_config() {
        let path = temp_path("config");
        let config = StorageConfig::new(&path);
        let store = FileStore::from_config(&config).unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        let _ = fs::remove_file(&path);
    }
}
