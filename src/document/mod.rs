// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document layer containing the configuration document implementation.
//!
//! This module contains `ConfigDocument`, the main entry point of the crate,
//! which composes a store and a codec from the adapters layer into a
//! loadable, addressable, persistable configuration tree.

pub mod config_document;

// Re-export commonly used types
pub use config_document::{ConfigDocument, DocumentBuilder};
