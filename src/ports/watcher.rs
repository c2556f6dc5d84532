// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration watcher trait definition.
//!
//! This module defines the `ConfigWatcher` trait, which provides an interface
//! for watching a configuration document's backing storage for external
//! changes and triggering callbacks when changes occur.

use crate::domain::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Type alias for change notification callbacks.
///
/// The callback is invoked with the path of the document that changed. It
/// should be non-blocking; a typical implementation reloads the document
/// behind a lock.
pub type ChangeCallback = Arc<dyn Fn(PathBuf) + Send + Sync>;

/// A trait for watching a configuration document for external changes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Examples
///
/// ```
/// use config_api::ports::{ChangeCallback, ConfigWatcher};
/// use config_api::domain::Result;
///
/// struct MyWatcher;
///
/// impl ConfigWatcher for MyWatcher {
///     fn watch(&mut self, _callback: ChangeCallback) -> Result<()> {
///         Ok(())
///     }
///
///     fn stop(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait ConfigWatcher: Send + Sync {
    /// Starts watching for changes.
    ///
    /// When a change is detected, the provided callback is invoked with the
    /// path that changed.
    fn watch(&mut self, callback: ChangeCallback) -> Result<()>;

    /// Stops watching for changes and releases the watcher's resources.
    ///
    /// After this returns, no more change notifications are delivered.
    fn stop(&mut self) -> Result<()>;
}
