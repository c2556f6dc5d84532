// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading, addressing,
//! converting, or persisting configuration documents. All errors use `thiserror`
//! for proper error handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when reading,
/// writing, or converting configuration values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use config_api::domain::ConfigError;
///
/// fn lookup_port() -> Result<u16, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "server.port".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key was not present in the document or its defaults.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The dotted path that was not found
        key: String,
    },

    /// A node had a different shape than the requested access expected.
    #[error("Expected {expected} at '{key}' but found {found}")]
    TypeMismatch {
        /// The dotted path being accessed
        key: String,
        /// The kind of node the accessor expected
        expected: &'static str,
        /// The kind of node actually present
        found: &'static str,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A dotted key path could not be parsed.
    #[error("Invalid configuration path '{path}': {reason}")]
    InvalidPath {
        /// The offending path string
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// Failed to parse or render a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred in the backing document store.
    #[error("Configuration store '{location}' error: {message}")]
    StoreError {
        /// The store location the error relates to
        location: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred in a configuration watcher.
    #[error("Configuration watcher error: {message}")]
    WatcherError {
        /// The error message
        message: String,
        /// The underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading or writing configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `TypeConversionError` from any conversion failure.
    pub fn conversion(
        key: impl Into<String>,
        target_type: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::TypeConversionError {
            key: key.into(),
            target_type: target_type.into(),
            source: Box::new(source),
        }
    }

    /// Creates an `InvalidPath` error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `ParseError` without an underlying source.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: "server.port".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration key not found: server.port"
        );
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: "server.port".to_string(),
            expected: "integer",
            found: "string",
        };
        assert_eq!(
            error.to_string(),
            "Expected integer at 'server.port' but found string"
        );
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = ConfigError::conversion("server.port", "integer", source_error);
        assert!(error.to_string().contains("server.port"));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_invalid_path_error() {
        let error = ConfigError::invalid_path("a..b", "empty segment");
        assert_eq!(
            error.to_string(),
            "Invalid configuration path 'a..b': empty segment"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::parse("Invalid YAML");
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_store_error() {
        let error = ConfigError::StoreError {
            location: "/etc/app/config.yaml".to_string(),
            message: "File too large".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration store '/etc/app/config.yaml' error: File too large"
        );
    }

    #[test]
    fn test_watcher_error() {
        let error = ConfigError::WatcherError {
            message: "File watcher failed".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration watcher error: File watcher failed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
