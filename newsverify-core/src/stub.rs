use async_trait::async_trait;

use crate::connector::{AvsConnector, NewsVerificationProvider};
use newsverify_types::{NewsItem, VerifyError};

/// Placeholder AVS that accepts every news item.
///
/// The item is never read. Each call emits one `info` log line on target
/// `newsverify::avs` and resolves to `true`; there is no failure path.
///
/// The log line is only compiled in with the `tracing` feature (on by
/// default). Building with `--no-default-features` silences it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAvs;

impl StubAvs {
    /// Stable connector name.
    pub const NAME: &'static str = "newsverify-stub";

    /// Create the stub connector. Construction has no side effects.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AvsConnector for StubAvs {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Stub"
    }

    fn as_news_verification_provider(&self) -> Option<&dyn NewsVerificationProvider> {
        Some(self as &dyn NewsVerificationProvider)
    }
}

#[async_trait]
impl NewsVerificationProvider for StubAvs {
    async fn verify_news(&self, _item: &NewsItem) -> Result<bool, VerifyError> {
        #[cfg(feature = "tracing")]
        tracing::info!(target: "newsverify::avs", avs = Self::NAME, "Calling AVS for verification...");
        Ok(true)
    }
}
