// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the
//! boundaries of the configuration system: how document text becomes a tree
//! and back (`DocumentCodec`), where the bytes live (`DocumentStore`), and
//! how external changes are observed (`ConfigWatcher`). Concrete
//! implementations live in the adapters layer.

pub mod codec;
pub mod store;
pub mod watcher;

// Re-export commonly used types
pub use codec::DocumentCodec;
pub use store::DocumentStore;
pub use watcher::{ChangeCallback, ConfigWatcher};
