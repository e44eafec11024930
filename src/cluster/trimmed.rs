//! Whitespace-normalizing string type
//!
//! Every string field of the cluster model deserializes through
//! [`TrimmedString`], so downstream validation never sees leading or
//! trailing whitespace.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;

/// A string that is trimmed of surrounding whitespace on construction
/// and deserialization.
///
/// Normalization is idempotent: trimming an already trimmed string is a
/// no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrimmedString(String);

impl TrimmedString {
    /// Creates a trimmed string from any string-like value.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    /// Returns the normalized string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the normalized string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for TrimmedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl Deref for TrimmedString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TrimmedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrimmedString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TrimmedString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for TrimmedString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TrimmedString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TrimmedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
