//! Configuration types for the verification agent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `NewsVerifierAgent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Timeout applied to each individual AVS call.
    pub avs_timeout: Duration,
    /// Optional overall deadline for batch verification.
    /// If set, `verify_batch` fails with `RequestTimeout` once it elapses.
    pub request_timeout: Option<Duration>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            avs_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
