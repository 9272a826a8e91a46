//! newsverify routes news verification requests to an AVS connector.
//!
//! Overview
//! - `NewsVerifierAgent::new()` wires the agent to `StubAvs`, a placeholder
//!   that logs "Calling AVS for verification..." and accepts every item.
//! - Real or mock AVS connectors implement the `newsverify_core` contracts and
//!   are plugged in through the builder.
//! - Each AVS call is bounded by a per-call timeout; batch verification can
//!   additionally be bounded by a request deadline.
//!
//! Examples
//! Verifying an item with the default stub:
//! ```rust,ignore
//! use newsverify::{NewsItem, NewsVerifierAgent};
//!
//! let agent = NewsVerifierAgent::new();
//! assert!(agent.verify_news(&NewsItem::empty()).await?);
//! ```
//!
//! Plugging in another connector:
//! ```rust,ignore
//! use std::{sync::Arc, time::Duration};
//!
//! let agent = NewsVerifierAgent::builder()
//!     .avs(Arc::new(MyAvs::new()))
//!     .avs_timeout(Duration::from_secs(2))
//!     .request_timeout(Duration::from_secs(10))
//!     .build()?;
//! let outcomes = agent.verify_batch(&items).await?;
//! ```
//!
//! See `demos/examples/` for runnable demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod util;
mod verify;

pub use core::{NewsVerifierAgent, NewsVerifierAgentBuilder};
pub use util::join_with_deadline;

pub use newsverify_core::{
    AgentConfig, AvsConnector, AvsKey, Capability, NewsItem, NewsVerificationProvider, StubAvs,
    TaskResponse, VerificationReport, VerifyError,
};
