use core::fmt;

/// High-level capability labels for errors and telemetry.
///
/// These map one-to-one with agent operations and give consistent
/// Display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Capability {
    /// Verification of a single news item.
    VerifyNews,
    /// Concurrent verification of several news items.
    VerifyBatch,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerifyNews => "verify-news",
            Self::VerifyBatch => "verify-batch",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Capability> for String {
    fn from(c: Capability) -> Self {
        c.as_str().to_string()
    }
}
