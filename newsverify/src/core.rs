use std::sync::Arc;
use std::time::Duration;

use newsverify_core::{AgentConfig, AvsConnector, StubAvs, VerifyError};

/// Agent that forwards news verification requests to a single AVS connector.
pub struct NewsVerifierAgent {
    pub(crate) avs: Arc<dyn AvsConnector>,
    pub(crate) cfg: AgentConfig,
}

impl Default for NewsVerifierAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a `NewsVerifierAgent` with custom configuration.
pub struct NewsVerifierAgentBuilder {
    avs: Option<Arc<dyn AvsConnector>>,
    cfg: AgentConfig,
}

impl Default for NewsVerifierAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsVerifierAgentBuilder {
    /// Create a new builder with default configuration and no connector.
    ///
    /// If no connector is registered before [`build`](Self::build), the agent
    /// falls back to [`StubAvs`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            avs: None,
            cfg: AgentConfig::default(),
        }
    }

    /// Use the given AVS connector. A later call replaces an earlier one.
    #[must_use]
    pub fn avs(mut self, avs: Arc<dyn AvsConnector>) -> Self {
        self.avs = Some(avs);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: AgentConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-call AVS timeout.
    #[must_use]
    pub const fn avs_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.avs_timeout = timeout;
        self
    }

    /// Set an overall deadline for batch verification.
    ///
    /// When exceeded, `verify_batch` returns a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the agent.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the per-call AVS timeout is zero.
    pub fn build(self) -> Result<NewsVerifierAgent, VerifyError> {
        if self.cfg.avs_timeout.is_zero() {
            return Err(VerifyError::InvalidArg(
                "avs_timeout must be greater than zero".to_string(),
            ));
        }
        let avs = self
            .avs
            .unwrap_or_else(|| Arc::new(StubAvs::new()) as Arc<dyn AvsConnector>);
        Ok(NewsVerifierAgent { avs, cfg: self.cfg })
    }
}

/// Tag an AVS error with the connector name unless it already carries one.
pub(crate) fn tag_err(avs: &str, e: VerifyError) -> VerifyError {
    match e {
        e @ (VerifyError::Avs { .. }
        | VerifyError::AvsTimeout { .. }
        | VerifyError::RequestTimeout { .. }
        | VerifyError::Unsupported { .. }) => e,
        other => VerifyError::avs(avs, other.to_string()),
    }
}

/// Bound `fut` by an optional request-level deadline.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, VerifyError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| VerifyError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl NewsVerifierAgent {
    /// Create an agent wired to [`StubAvs`] with default configuration.
    ///
    /// Construction performs no I/O and emits no logs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            avs: Arc::new(StubAvs::new()),
            cfg: AgentConfig::default(),
        }
    }

    /// Start building a new agent.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use newsverify_mock::MockAvs;
    ///
    /// let agent = newsverify::NewsVerifierAgent::builder()
    ///     .avs(Arc::new(MockAvs::new()))
    ///     .avs_timeout(std::time::Duration::from_secs(1))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> NewsVerifierAgentBuilder {
        NewsVerifierAgentBuilder::new()
    }

    /// Name of the AVS connector this agent talks to.
    #[must_use]
    pub fn avs_name(&self) -> &'static str {
        self.avs.name()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &AgentConfig {
        &self.cfg
    }

    /// Wrap an AVS future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "newsverify::core::avs_call_with_timeout",
            skip(fut),
            fields(
                avs = avs_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn avs_call_with_timeout<T, Fut>(
        avs_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, VerifyError>
    where
        Fut: core::future::Future<Output = Result<T, VerifyError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(VerifyError::avs_timeout(avs_name, capability)))
    }
}
