//! Content-assist (generative API) configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the external content-assist collaborator
///
/// The API credential is optional on purpose: the assist service degrades
/// to fallback content when no credential is configured, and core flows
/// must never depend on it being present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistConfig {
    /// API key for the generative endpoint, if configured
    pub api_key: Option<String>,

    /// Model used for text generation
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for portfolio image generation
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Timeout for a single API request in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AssistConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `GEMINI_API_KEY`, falling back to `API_KEY`. A missing
    /// credential is not an error here; it surfaces later as degraded
    /// assist output.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            api_key,
            text_model: env::var("ASSIST_TEXT_MODEL").unwrap_or_else(|_| default_text_model()),
            image_model: env::var("ASSIST_IMAGE_MODEL").unwrap_or_else(|_| default_image_model()),
            request_timeout_secs: env::var("ASSIST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Check whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            text_model: default_text_model(),
            image_model: default_image_model(),
            request_timeout_secs: default_timeout(),
        }
    }
}
