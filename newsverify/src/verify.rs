use chrono::Utc;
use newsverify_core::{Capability, NewsItem, TaskResponse, VerificationReport, VerifyError};

use crate::NewsVerifierAgent;
use crate::core::tag_err;

impl NewsVerifierAgent {
    /// Verify a news item through the configured AVS.
    ///
    /// The item is forwarded untouched. With the default [`StubAvs`](crate::StubAvs)
    /// this always resolves to `Ok(true)`, for any item including
    /// [`NewsItem::absent`].
    ///
    /// # Errors
    /// Only non-default connectors can fail:
    /// - `Unsupported` if the connector does not offer news verification,
    /// - `AvsTimeout` if the call exceeds `avs_timeout`,
    /// - `Avs` for any other connector failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "newsverify::agent",
            skip(self, item),
            fields(avs = self.avs.name(), vendor = self.avs.vendor(), absent = item.is_absent()),
        )
    )]
    pub async fn verify_news(&self, item: &NewsItem) -> Result<bool, VerifyError> {
        let capability = Capability::VerifyNews.as_str();
        let name = self.avs.name();
        let provider = self
            .avs
            .as_news_verification_provider()
            .ok_or_else(|| VerifyError::unsupported(capability))?;
        Self::avs_call_with_timeout(
            name,
            capability,
            self.cfg.avs_timeout,
            provider.verify_news(item),
        )
        .await
        .map_err(|e| tag_err(name, e))
    }

    /// Verify a news item and annotate the outcome with the answering AVS and a timestamp.
    ///
    /// # Errors
    /// Same as [`verify_news`](Self::verify_news).
    pub async fn verify_news_report(
        &self,
        item: &NewsItem,
    ) -> Result<VerificationReport, VerifyError> {
        let verified = self.verify_news(item).await?;
        Ok(VerificationReport {
            verified,
            avs: self.avs.name().to_string(),
            vendor: self.avs.vendor().to_string(),
            checked_at: Utc::now(),
        })
    }

    /// Verify several items concurrently through the same AVS.
    ///
    /// Outcomes are returned in input order; one item failing does not affect
    /// the others. Each call is bounded by `avs_timeout` and the whole batch by
    /// `request_timeout` when configured.
    ///
    /// # Errors
    /// Returns `RequestTimeout` for `verify-batch` if the request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "newsverify::agent",
            skip(self, items),
            fields(avs = self.avs.name(), items = items.len()),
        )
    )]
    pub async fn verify_batch(
        &self,
        items: &[NewsItem],
    ) -> Result<Vec<Result<bool, VerifyError>>, VerifyError> {
        let tasks = items.iter().map(|item| self.verify_news(item));
        crate::join_with_deadline(tasks, self.cfg.request_timeout)
            .await
            .map_err(|e| match e {
                VerifyError::RequestTimeout { .. } => {
                    VerifyError::request_timeout(Capability::VerifyBatch)
                }
                other => other,
            })
    }

    /// Build the operator response for a verification task.
    ///
    /// `verification_status` is the outcome of [`verify_news`](Self::verify_news)
    /// for `item`; no signing is performed.
    ///
    /// # Errors
    /// Same as [`verify_news`](Self::verify_news).
    pub async fn respond_to_task(
        &self,
        task_index: u32,
        block_number: u64,
        item: &NewsItem,
    ) -> Result<TaskResponse, VerifyError> {
        let verification_status = self.verify_news(item).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "newsverify::agent",
            task_index,
            block_number,
            verification_status,
            "task response ready"
        );
        Ok(TaskResponse {
            task_index,
            verification_status,
            block_number,
        })
    }
}
