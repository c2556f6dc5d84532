// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key path type for addressing nodes in a configuration tree.
//!
//! This module provides the `KeyPath` type, an ordered sequence of key segments
//! parsed from dotted notation (e.g. `"server.port"`). Every path addresses at
//! most one node in a document tree.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of key segments identifying a node in a document tree.
///
/// Paths are written in dotted notation: `"server.port"` addresses the `port`
/// key inside the `server` section. A path always has at least one segment,
/// and no segment may be empty. Keys that themselves contain a `.` cannot be
/// addressed segment-wise through dotted notation.
///
/// # Examples
///
/// ```
/// use config_api::domain::KeyPath;
///
/// let path = KeyPath::from_dotted("server.port").unwrap();
/// assert_eq!(path.segments(), ["server", "port"]);
/// assert_eq!(path.leaf(), "port");
/// assert_eq!(path.to_string(), "server.port");
///
/// assert!(KeyPath::from_dotted("").is_err());
/// assert!(KeyPath::from_dotted("a..b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Parses a path from dotted notation.
    ///
    /// Returns an error for an empty string or for any empty segment
    /// (leading, trailing, or doubled dots).
    pub fn from_dotted(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(ConfigError::invalid_path(path, "path is empty"));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ConfigError::invalid_path(path, "empty segment"));
        }
        Ok(KeyPath(segments))
    }

    /// Builds a path from pre-split segments.
    ///
    /// Returns an error if no segments are given or any segment is empty.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ConfigError::invalid_path("", "path is empty"));
        }
        if segments.iter().any(String::is_empty) {
            let joined = segments.join(".");
            return Err(ConfigError::invalid_path(joined, "empty segment"));
        }
        Ok(KeyPath(segments))
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a path has at least one segment by construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the final segment of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_api::domain::KeyPath;
    ///
    /// let path = KeyPath::from_dotted("database.connection.host").unwrap();
    /// assert_eq!(path.leaf(), "host");
    /// ```
    pub fn leaf(&self) -> &str {
        // a KeyPath is never empty
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Splits the path into its parent segments and the leaf segment.
    pub fn split_leaf(&self) -> (&[String], &str) {
        let (leaf, parents) = match self.0.split_last() {
            Some((leaf, parents)) => (leaf.as_str(), parents),
            None => ("", &[] as &[String]),
        };
        (parents, leaf)
    }

    /// Returns the parent path, or `None` for a single-segment path.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_api::domain::KeyPath;
    ///
    /// let path = KeyPath::from_dotted("server.port").unwrap();
    /// assert_eq!(path.parent().unwrap().to_string(), "server");
    ///
    /// let root = KeyPath::from_dotted("server").unwrap();
    /// assert!(root.parent().is_none());
    /// ```
    pub fn parent(&self) -> Option<KeyPath> {
        if self.0.len() < 2 {
            return None;
        }
        Some(KeyPath(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Returns a new path extended with the given segment.
    pub fn child(&self, segment: impl Into<String>) -> KeyPath {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        KeyPath(segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        KeyPath::from_dotted(s)
    }
}

impl TryFrom<&str> for KeyPath {
    type Error = ConfigError;

    fn try_from(s: &str) -> Result<Self> {
        KeyPath::from_dotted(s)
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.to_string()
    }
}
