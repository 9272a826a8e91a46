//! newsverify-specific data transfer objects, errors, and configuration primitives.
#![warn(missing_docs)]

mod avs;
mod capability;
mod config;
mod error;
mod news;
mod reports;

pub use avs::AvsKey;
pub use capability::Capability;
pub use config::AgentConfig;
pub use error::VerifyError;
pub use news::NewsItem;
pub use reports::{TaskResponse, VerificationReport};
