//! newsverify-core
//!
//! Core types and traits shared across the newsverify workspace.
//!
//! - `connector`: the `AvsConnector` trait and its capability provider traits.
//! - `stub`: `StubAvs`, the placeholder AVS that accepts every news item.
//!
//! Features
//! --------
//! - `tracing` (default): emits the `StubAvs` "Calling AVS for verification..."
//!   line. Without it the stub still answers `true` but logs nothing.
//!
//! The traits are runtime-agnostic; the agent in the `newsverify` crate drives
//! them on Tokio.
#![warn(missing_docs)]

/// AVS connector traits.
pub mod connector;
/// Placeholder AVS connector.
pub mod stub;

pub use connector::{AvsConnector, NewsVerificationProvider};
pub use stub::StubAvs;

pub use newsverify_types::{
    AgentConfig, AvsKey, Capability, NewsItem, TaskResponse, VerificationReport, VerifyError,
};
