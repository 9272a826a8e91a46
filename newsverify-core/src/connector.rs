use async_trait::async_trait;

use newsverify_types::{AvsKey, NewsItem, VerifyError};

/// Focused role trait for connectors that can verify news items.
#[async_trait]
pub trait NewsVerificationProvider: Send + Sync {
    /// Ask the AVS whether the given news item is verified.
    async fn verify_news(&self, item: &NewsItem) -> Result<bool, VerifyError>;
}

/// Primary connector interface for an attestation/verification service.
///
/// Capabilities are advertised through `as_*_provider` accessors that return
/// `None` unless a connector opts in.
pub trait AvsConnector: Send + Sync {
    /// A stable identifier (e.g., "newsverify-stub").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> AvsKey {
        AvsKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise news verification by returning a usable trait object reference when supported.
    fn as_news_verification_provider(&self) -> Option<&dyn NewsVerificationProvider> {
        None
    }
}
