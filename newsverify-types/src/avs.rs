//! AVS connector metadata usable across crates.

/// Typed key for identifying an AVS connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvsKey(pub &'static str);

impl AvsKey {
    /// Construct a new typed key from a static connector name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<AvsKey> for &'static str {
    fn from(k: AvsKey) -> Self {
        k.0
    }
}

impl core::fmt::Display for AvsKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
