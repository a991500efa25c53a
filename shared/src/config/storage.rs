//! Storage substrate configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Configuration for the persistent key-value substrate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path to the backing data file used by the file store
    pub data_file: PathBuf,
}

impl StorageConfig {
    /// Create a configuration pointing at the given data file
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// `SKILLSHARE_DATA_FILE` overrides the backing file location.
    pub fn from_env() -> Self {
        let data_file = env::var("SKILLSHARE_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("skillshare.json"));
        Self::new(data_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new("skillshare.json")
    }
}
