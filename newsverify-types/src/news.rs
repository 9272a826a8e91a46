//! The news item handed to an AVS for verification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque news item.
///
/// The payload has no fixed schema yet; it is carried as raw JSON and is
/// never inspected or validated on the way to the AVS. A missing item is
/// represented by [`NewsItem::absent`], which serializes as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsItem(Value);

impl NewsItem {
    /// Wrap an arbitrary JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// An item that was not supplied at all.
    #[must_use]
    pub const fn absent() -> Self {
        Self(Value::Null)
    }

    /// An empty JSON object, `{}`.
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    /// True when no payload was supplied.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_null()
    }

    /// Borrow the raw payload.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the item and return the raw payload.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for NewsItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<NewsItem> for Value {
    fn from(item: NewsItem) -> Self {
        item.0
    }
}
