use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the newsverify workspace.
///
/// The bundled stub AVS never produces one; these cover capability
/// mismatches, argument validation, and AVS-tagged failures from real
/// connectors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerifyError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label (e.g. "verify-news").
        capability: String,
    },

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An AVS connector returned an error.
    #[error("{avs} failed: {msg}")]
    Avs {
        /// Connector name that failed.
        avs: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual AVS call exceeded the configured timeout.
    #[error("avs timed out: {capability} via {avs}")]
    AvsTimeout {
        /// Connector name that timed out.
        avs: String,
        /// Capability label.
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl VerifyError {
    /// Helper: build an `Unsupported` error for a capability label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build an `Avs` error with the connector name and message.
    pub fn avs(avs: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Avs {
            avs: avs.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `AvsTimeout` error.
    pub fn avs_timeout(avs: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::AvsTimeout {
            avs: avs.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A missing capability is a wiring issue rather than a verification failure.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }

    /// True for either per-call or request-level timeouts.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::AvsTimeout { .. } | Self::RequestTimeout { .. })
    }
}
