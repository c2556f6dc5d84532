// SPDX-License-Identifier: MIT OR Apache-2.0

//! Watcher adapters for observing external document changes.

#[cfg(feature = "reload")]
pub mod file_watcher;

#[cfg(feature = "reload")]
pub use file_watcher::FileWatcher;
