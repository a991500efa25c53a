//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `assist` - Content-assist (generative API) configuration
//! - `environment` - Environment detection
//! - `storage` - Persistent key-value substrate configuration

pub mod assist;
pub mod environment;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use assist::AssistConfig;
pub use environment::Environment;
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Storage substrate configuration
    pub storage: StorageConfig,

    /// Content-assist configuration
    pub assist: AssistConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            storage: StorageConfig::default(),
            assist: AssistConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            storage: StorageConfig::from_env(),
            assist: AssistConfig::from_env(),
        }
    }
}
