//! Shared utilities and common types for the SkillShare storage layer
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (environment, storage, content assist)
//! - Utility functions (email validation and normalization)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AssistConfig, Environment, StorageConfig};
pub use utils::validation;
