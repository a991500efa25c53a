//! # Infrastructure Layer
//!
//! Concrete implementations behind the core abstractions:
//! - **Store**: file-backed key-value substrate implementing
//!   `ss_core::store::KeyValueStore`
//! - **Assist**: Gemini content-assist client implementing
//!   `ss_core::services::assist::ContentAssist`, plus a mock for
//!   development and tests

pub mod assist;
pub mod store;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load a `.env` file into the process environment, if one exists
pub fn load_env() {
    dotenvy::dotenv().ok();
}
