use std::fmt;

use serde::Serialize;

/// Channel identifier value object.
///
/// Opaque: the value is forwarded to the fetcher exactly as received, no
/// format or emptiness check is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    /// Wrap a raw identifier.
    ///
    /// # Arguments
    /// * `id` - Identifier taken from the request route
    ///
    /// # Returns
    /// ChannelId holding the value unchanged
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get identifier as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Channel data document returned by a fetcher.
///
/// Serialized back out verbatim; nothing in this service inspects its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChannelData(serde_json::Value);

impl ChannelData {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}
