//! Report envelopes produced by the agent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single verification, annotated with the AVS that answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether the AVS reported the item as verified.
    pub verified: bool,
    /// Name of the AVS connector that produced the outcome.
    pub avs: String,
    /// Vendor of that connector.
    pub vendor: String,
    /// When the outcome was received.
    pub checked_at: DateTime<Utc>,
}

/// Operator response for a verification task.
///
/// Field names are the wire names used when the response is submitted to the
/// task aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Index of the task being answered.
    pub task_index: u32,
    /// Verification outcome for the task's news item.
    pub verification_status: bool,
    /// Block number the response refers to.
    pub block_number: u64,
}
