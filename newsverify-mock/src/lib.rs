use async_trait::async_trait;
use newsverify_core::{AvsConnector, NewsItem, NewsVerificationProvider, VerifyError};

mod dynamic;

pub use dynamic::{DynamicMockAvs, DynamicMockController, MockBehavior};

/// Mock AVS for CI-safe examples and tests.
///
/// Behavior is keyed off the item payload:
/// - the string `"FAIL"` yields an AVS error,
/// - the string `"TIMEOUT"` sleeps briefly before answering,
/// - an object with `"verified": false` is rejected,
/// - anything else is verified.
pub struct MockAvs;

impl Default for MockAvs {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAvs {
    /// Stable connector name.
    pub const NAME: &'static str = "newsverify-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(item: &NewsItem) -> Result<(), VerifyError> {
        match item.as_value().as_str() {
            Some("FAIL") => Err(VerifyError::avs(Self::NAME, "forced failure: verify-news")),
            Some("TIMEOUT") => {
                // Short enough to keep tests quick, long enough to trip tight agent timeouts
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl AvsConnector for MockAvs {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_news_verification_provider(&self) -> Option<&dyn NewsVerificationProvider> {
        Some(self as &dyn NewsVerificationProvider)
    }
}

#[async_trait]
impl NewsVerificationProvider for MockAvs {
    async fn verify_news(&self, item: &NewsItem) -> Result<bool, VerifyError> {
        Self::maybe_fail_or_timeout(item).await?;
        let rejected = item
            .as_value()
            .get("verified")
            .and_then(serde_json::Value::as_bool)
            == Some(false);
        Ok(!rejected)
    }
}
