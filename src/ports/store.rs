// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document store trait definition.
//!
//! This module defines the `DocumentStore` trait, the interface to whatever
//! holds a configuration document's serialized bytes. Typically that is a
//! file on disk, but in-memory or remote stores fit the same seam.

use crate::domain::Result;

/// A trait for the backing storage of a configuration document.
///
/// A store holds exactly one document. Loading distinguishes "the document
/// does not exist yet" (`Ok(None)`) from genuine failures, so that a fresh
/// installation can start from defaults and create the document on first
/// save. Persisting must be atomic: a reader never observes a half-written
/// document.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Examples
///
/// ```
/// use config_api::ports::DocumentStore;
/// use config_api::domain::Result;
/// use std::sync::Mutex;
///
/// struct MemoryStore {
///     content: Mutex<Option<String>>,
/// }
///
/// impl DocumentStore for MemoryStore {
///     fn location(&self) -> String {
///         "<memory>".to_string()
///     }
///
///     fn load(&self) -> Result<Option<String>> {
///         Ok(self.content.lock().ok().and_then(|c| c.clone()))
///     }
///
///     fn persist(&self, content: &str) -> Result<()> {
///         if let Ok(mut slot) = self.content.lock() {
///             *slot = Some(content.to_string());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable description of where the document lives.
    ///
    /// Used for logging and error messages, e.g. a file path.
    fn location(&self) -> String;

    /// Loads the serialized document.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - The document's current content
    /// * `Ok(None)` - The document does not exist yet
    /// * `Err(ConfigError)` - The document exists but could not be read
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored document with the given content, atomically.
    fn persist(&self, content: &str) -> Result<()>;
}
