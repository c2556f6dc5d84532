// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete implementations of the ports.
//!
//! This module contains the built-in codec (`YamlCodec`), the file-backed
//! store (`FileStore`), and the optional file watcher. Each adapter
//! implements the corresponding trait from the ports layer.

pub mod file;
pub mod watchers;
pub mod yaml;

// Re-export adapters
pub use file::FileStore;
pub use yaml::YamlCodec;

#[cfg(feature = "reload")]
pub use watchers::FileWatcher;
