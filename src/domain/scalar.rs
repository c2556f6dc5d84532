// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed scalar values with type-safe conversions.
//!
//! This module provides the `Scalar` type, the leaf value of a configuration
//! tree. Unlike a plain string wrapper, a `Scalar` carries the type the YAML
//! parser resolved (null, boolean, integer, float, or string) and provides
//! conversion methods that either use that type directly or coerce from a
//! string representation.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A typed leaf value in a configuration tree.
///
/// Conversion methods take the dotted key being accessed so that errors carry
/// useful context. String scalars are coerced where it is unambiguous: the
/// usual boolean spellings are accepted, and numeric strings parse into
/// numbers. Conversions never silently truncate.
///
/// # Examples
///
/// ```
/// use config_api::domain::Scalar;
///
/// let port = Scalar::from(8080);
/// assert_eq!(port.as_i64("server.port").unwrap(), 8080);
///
/// let flag = Scalar::from("yes");
/// assert!(flag.as_bool("server.enabled").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An explicit null value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A signed integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A string value.
    Str(String),
}

impl Scalar {
    /// Returns a short name for the scalar's type, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "string",
        }
    }

    /// Returns `true` for `Scalar::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns the value as a string slice, or an error for non-string scalars.
    pub fn as_str(&self, key: &str) -> Result<&str> {
        match self {
            Scalar::Str(s) => Ok(s),
            other => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Booleans convert directly. Strings are coerced case-insensitively:
    /// `true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_api::domain::Scalar;
    ///
    /// assert!(Scalar::Bool(true).as_bool("k").unwrap());
    /// assert!(Scalar::from("on").as_bool("k").unwrap());
    /// assert!(!Scalar::from("Off").as_bool("k").unwrap());
    /// assert!(Scalar::from("maybe").as_bool("k").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            Scalar::Bool(b) => Ok(*b),
            Scalar::Str(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(true),
                "false" | "no" | "0" | "off" => Ok(false),
                _ => match s.parse::<bool>() {
                    Ok(b) => Ok(b),
                    Err(e) => Err(ConfigError::conversion(key, "boolean", e)),
                },
            },
            other => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "boolean",
                found: other.kind(),
            }),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Integers convert directly; numeric strings are parsed. Floats are
    /// rejected rather than truncated.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            Scalar::Int(i) => Ok(*i),
            Scalar::Str(s) => s
                .parse::<i64>()
                .map_err(|e| ConfigError::conversion(key, "integer", e)),
            other => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "integer",
                found: other.kind(),
            }),
        }
    }

    /// Converts the value to a `u64`.
    ///
    /// Negative integers are a conversion error.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        match self {
            Scalar::Int(i) => u64::try_from(*i)
                .map_err(|e| ConfigError::conversion(key, "unsigned integer", e)),
            Scalar::Str(s) => s
                .parse::<u64>()
                .map_err(|e| ConfigError::conversion(key, "unsigned integer", e)),
            other => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "unsigned integer",
                found: other.kind(),
            }),
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Floats and integers convert directly; numeric strings are parsed.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            Scalar::Float(f) => Ok(*f),
            Scalar::Int(i) => Ok(*i as f64),
            Scalar::Str(s) => s
                .parse::<f64>()
                .map_err(|e| ConfigError::conversion(key, "float", e)),
            other => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "float",
                found: other.kind(),
            }),
        }
    }

    /// Parses a string scalar into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_api::domain::Scalar;
    /// use std::net::IpAddr;
    ///
    /// let value = Scalar::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.bind").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let text = self.as_str(key)?;
        text.parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<u32> for Scalar {
    fn from(i: u32) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => write!(f, "{:?}", v),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}
