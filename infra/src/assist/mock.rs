//! Mock content-assist client for development and testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::info;

use ss_core::services::assist::{AssistError, ContentAssist, GeneratedImage};

// 1x1 transparent PNG
const SAMPLE_IMAGE_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Canned-response implementation of [`ContentAssist`]
///
/// Returns deterministic content and counts calls; can be flipped into a
/// failing mode to exercise degradation paths.
pub struct MockAssist {
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockAssist {
    /// Create a mock that succeeds
    pub fn new() -> Self {
        Self {
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose every call fails
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.fail.store(true, Ordering::SeqCst);
        mock
    }

    /// Toggle failure mode
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of operations attempted against this mock
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), AssistError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            Err(AssistError::Request("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for MockAssist {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentAssist for MockAssist {
    async fn generate_description(
        &self,
        title: &str,
        category: &str,
        _keywords: &str,
    ) -> Result<String, AssistError> {
        self.record()?;
        info!(title, category, "mock description generated");
        Ok(format!(
            "{title}: a friendly, reliable {category} service offered by your neighbor."
        ))
    }

    async fn suggest_price_range(
        &self,
        _title: &str,
        _category: &str,
    ) -> Result<String, AssistError> {
        self.record()?;
        Ok("\u{20b9}200 - \u{20b9}500".to_string())
    }

    async fn generate_portfolio_image(
        &self,
        _topic: &str,
        _skill: &str,
    ) -> Result<Option<GeneratedImage>, AssistError> {
        self.record()?;
        Ok(Some(GeneratedImage {
            mime_type: "image/png".to_string(),
            data: SAMPLE_IMAGE_B64.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::services::assist::{ListingAssistService, DESCRIPTION_FALLBACK};

    #[tokio::test]
    async fn test_mock_returns_canned_content() {
        let mock = MockAssist::new();
        let text = mock
            .generate_description("Sourdough", "Cooking & Baking", "organic")
            .await
            .unwrap();
        assert!(text.contains("Sourdough"));

        let image = mock.generate_portfolio_image("bread", "baking").await.unwrap();
        assert!(image.unwrap().decode_bytes().is_ok());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_mock_degrades_through_facade() {
        let service = ListingAssistService::new(MockAssist::failing());

        let text = service
            .description_or_fallback("Sourdough", "Cooking & Baking", "organic")
            .await;
        assert_eq!(text, DESCRIPTION_FALLBACK);

        assert_eq!(service.price_range_or_empty("t", "c").await, "");
        assert!(service.portfolio_image_or_none("t", "s").await.is_none());
    }
}
