//! Gemini content-assist client.
//!
//! Thin JSON client for the generative-language `generateContent`
//! endpoint. Each operation is attempted exactly once; callers wrap this
//! client in the core assist facade, which degrades failures to fallback
//! content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use ss_core::services::assist::{AssistError, ContentAssist, GeneratedImage};
use ss_shared::AssistConfig;

use crate::InfrastructureError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini implementation of [`ContentAssist`]
pub struct GeminiClient {
    http: reqwest::Client,
    config: AssistConfig,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "imageConfig")]
    image_config: ImageConfig,
}

#[derive(Serialize)]
struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateRequest {
    fn text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }

    fn image(prompt: String, aspect_ratio: &str) -> Self {
        Self {
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                },
            }),
            ..Self::text(prompt)
        }
    }
}

impl GenerateResponse {
    /// First text part across candidates, if any
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.text.clone())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// First inline image part across candidates, if any
    fn first_image(&self) -> Option<GeneratedImage> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| GeneratedImage {
                mime_type: inline.mime_type.clone(),
                data: inline.data.clone(),
            })
    }
}

impl GeminiClient {
    /// Create a client from the given configuration
    pub fn new(config: AssistConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("http client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        crate::load_env();
        Self::new(AssistConfig::from_env())
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AssistError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistError::MissingCredential)?;

        debug!(model, "content generation request");
        let response = self
            .http
            .post(format!("{BASE_URL}/{model}:generateContent"))
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(model, error = %e, "assist request failed");
                AssistError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistError::Request(format!("HTTP {status}")));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| AssistError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ContentAssist for GeminiClient {
    async fn generate_description(
        &self,
        title: &str,
        category: &str,
        keywords: &str,
    ) -> Result<String, AssistError> {
        let prompt = format!(
            "Write a professional and attracting service description for a \
             marketplace listing.\n\
             Service Title: {title}\n\
             Category: {category}\n\
             Keywords/Details: {keywords}\n\n\
             Keep it under 100 words. Be inviting and trustworthy."
        );

        let response = self
            .generate(&self.config.text_model, &GenerateRequest::text(prompt))
            .await?;
        response
            .first_text()
            .ok_or_else(|| AssistError::InvalidResponse("no text in response".to_string()))
    }

    async fn suggest_price_range(
        &self,
        title: &str,
        category: &str,
    ) -> Result<String, AssistError> {
        let prompt = format!(
            "Suggest an affordable price range for a local community service. \
             The price should generally be below \u{20b9}1000 to keep it accessible \
             for neighbors.\n\
             Title: {title}\n\
             Category: {category}\n\n\
             Response format: just the price range (e.g., \"\u{20b9}200 - \u{20b9}500\"). \
             No other text."
        );

        let response = self
            .generate(&self.config.text_model, &GenerateRequest::text(prompt))
            .await?;
        response
            .first_text()
            .ok_or_else(|| AssistError::InvalidResponse("no text in response".to_string()))
    }

    async fn generate_portfolio_image(
        &self,
        topic: &str,
        skill: &str,
    ) -> Result<Option<GeneratedImage>, AssistError> {
        let prompt = format!(
            "A professional, high-quality, realistic portfolio photograph for a \
             {skill} marketplace.\n\
             The image should show: {topic}.\n\
             Style: Realistic, authentic work sample, professional photography, \
             clean background, natural lighting, sharp focus.\n\
             Strict Rules: No text, no logos, no watermarks, no abstract art, \
             no cartoonish elements."
        );

        let response = self
            .generate(
                &self.config.image_model,
                &GenerateRequest::image(prompt, "1:1"),
            )
            .await?;
        Ok(response.first_image())
    }
}
