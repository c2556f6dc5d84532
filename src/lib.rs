// SPDX-License-Identifier: MIT OR Apache-2.0

//! A file-backed YAML configuration store.
//!
//! This crate provides a layered configuration document built atop YAML:
//! dotted-path addressing into an insertion-ordered tree, typed access with
//! defaults, programmatic comments, and atomic persistence back to disk.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The document tree and core types (`Section`, `Node`,
//!   `Scalar`, `KeyPath`, errors)
//! - **Ports**: Trait definitions that define interfaces (`DocumentCodec`,
//!   `DocumentStore`, `ConfigWatcher`)
//! - **Adapters**: The YAML codec, the file store, and the file watcher
//! - **Document**: The `ConfigDocument` type that orchestrates everything
//!
//! # Features
//!
//! - **Path Addressing**: `"server.port"` walks the tree; writes create
//!   missing intermediate sections
//! - **Type Safety**: Typed getters with contextual errors, plus serde
//!   access to whole subtrees
//! - **Defaults**: Reads fall back to a defaults tree; saves fold defaults
//!   into the file so it stays self-describing
//! - **Faithful Output**: Insertion order and attached comments survive
//!   serialization; saves replace the file atomically
//! - **Dynamic Reloading**: Watch the backing file and reload on change
//!
//! # Feature Flags
//!
//! - `reload`: Enable file watching with the `notify` crate
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use config_api::prelude::*;
//!
//! # fn main() -> config_api::domain::Result<()> {
//! let mut config = ConfigDocument::builder()
//!     .with_path("/etc/myapp/config.yaml")
//!     .with_defaults("server:\n  host: localhost\n  port: 8080\n")
//!     .build()?;
//!
//! let port = config.get_i64("server.port")?;
//! config.set("server.workers", 4)?;
//! config.save()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod document;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileStore, YamlCodec};
    pub use crate::document::{ConfigDocument, DocumentBuilder};
    pub use crate::domain::{ConfigError, KeyPath, Node, Result, Scalar, Section};
    pub use crate::ports::{ConfigWatcher, DocumentCodec, DocumentStore};

    #[cfg(feature = "reload")]
    pub use crate::adapters::FileWatcher;
}
