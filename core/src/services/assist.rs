//! Content-assist contract and degrading facade.
//!
//! The generative collaborator is best-effort: it may be unconfigured or
//! fail mid-request, and core flows must never block on its success. The
//! facade here turns every failure into an explicit fallback value.

use async_trait::async_trait;
use base64::Engine;
use thiserror::Error;
use tracing::warn;

/// Fallback description shown when assistance is unavailable
pub const DESCRIPTION_FALLBACK: &str =
    "Content assist is unavailable. Please provide a description manually.";

/// Errors a content-assist client can report
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Assist request failed: {0}")]
    Request(String),

    #[error("Assist response could not be interpreted: {0}")]
    InvalidResponse(String),
}

/// A generated image payload as returned by the collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// MIME type of the payload (e.g. image/png)
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl GeneratedImage {
    /// Render as a data URL suitable for direct embedding
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the raw image bytes
    pub fn decode_bytes(&self) -> Result<Vec<u8>, AssistError> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| AssistError::InvalidResponse(format!("bad base64 payload: {e}")))
    }
}

/// Request/response contract of the generative collaborator
///
/// Implementations are stateless from the caller's perspective; each call
/// is attempted once with no retry.
#[async_trait]
pub trait ContentAssist: Send + Sync {
    /// Draft a marketplace listing description
    async fn generate_description(
        &self,
        title: &str,
        category: &str,
        keywords: &str,
    ) -> Result<String, AssistError>;

    /// Suggest an affordable price range as a short text
    async fn suggest_price_range(&self, title: &str, category: &str)
        -> Result<String, AssistError>;

    /// Generate a portfolio image; Ok(None) when the model returns no image
    async fn generate_portfolio_image(
        &self,
        topic: &str,
        skill: &str,
    ) -> Result<Option<GeneratedImage>, AssistError>;
}

/// Degrading facade over a [`ContentAssist`] client
///
/// Every operation resolves to a usable value: failures surface as the
/// documented fallbacks (placeholder text, empty range, no image), never
/// as errors.
pub struct ListingAssistService<A: ContentAssist> {
    client: A,
}

impl<A: ContentAssist> ListingAssistService<A> {
    pub fn new(client: A) -> Self {
        Self { client }
    }

    /// Description draft, or the manual-entry fallback text
    pub async fn description_or_fallback(
        &self,
        title: &str,
        category: &str,
        keywords: &str,
    ) -> String {
        match self.client.generate_description(title, category, keywords).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => DESCRIPTION_FALLBACK.to_string(),
            Err(e) => {
                warn!(error = %e, "description assist degraded to fallback");
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }

    /// Price range suggestion, or an empty string when unavailable
    pub async fn price_range_or_empty(&self, title: &str, category: &str) -> String {
        match self.client.suggest_price_range(title, category).await {
            Ok(range) => range,
            Err(e) => {
                warn!(error = %e, "price assist degraded to empty suggestion");
                String::new()
            }
        }
    }

    /// Portfolio image, or None when generation is unavailable or empty
    pub async fn portfolio_image_or_none(
        &self,
        topic: &str,
        skill: &str,
    ) -> Option<GeneratedImage> {
        match self.client.generate_portfolio_image(topic, skill).await {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "image assist degraded to no result");
                None
            }
        }
    }
}
