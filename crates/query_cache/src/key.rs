//! Request descriptors used to address cache entries.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered list of string segments identifying one cached query.
///
/// Keys are compared segment-wise, so `["sessions"]` is a prefix of
/// `["sessions", "42"]` but not of `["sessionsx"]`.
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Builds a key from any sequence of string-like segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the key segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` when the key has no segments. An empty key matches every entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when `self` starts with every segment of `prefix`.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Returns a new key with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(raw) => f.write_str(&raw),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for QueryKey {
    fn from(segments: Vec<S>) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for QueryKey {
    fn from(segments: [S; N]) -> Self {
        Self::new(segments)
    }
}
