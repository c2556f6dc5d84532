// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document codec trait definition.
//!
//! This module defines the `DocumentCodec` trait, the interface for turning
//! serialized document text into a configuration tree and back.

use crate::domain::{Result, Section};

/// A trait for parsing and rendering configuration documents.
///
/// A codec owns both directions of the document boundary: `parse` builds a
/// tree from serialized text, and `render` serializes a tree back out.
/// Rendering must produce text that `parse` accepts and that rebuilds an
/// equal tree (comments excepted, since parsers do not generally surface
/// them).
///
/// # Examples
///
/// ```
/// use config_api::ports::DocumentCodec;
/// use config_api::domain::{Result, Section};
///
/// struct NullCodec;
///
/// impl DocumentCodec for NullCodec {
///     fn parse(&self, _content: &str) -> Result<Section> {
///         Ok(Section::new())
///     }
///
///     fn render(&self, _root: &Section) -> Result<String> {
///         Ok(String::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["null"]
///     }
/// }
/// ```
pub trait DocumentCodec: Send + Sync {
    /// Parses serialized document text into a configuration tree.
    ///
    /// The root of a configuration document is always a section; inputs whose
    /// top level is not a keyed mapping are a parse error. Empty input parses
    /// to an empty root.
    fn parse(&self, content: &str) -> Result<Section>;

    /// Renders a configuration tree to serialized document text.
    ///
    /// Key order follows the tree's insertion order, and comments attached to
    /// keys are included where the format supports them.
    fn render(&self, root: &Section) -> Result<String>;

    /// Returns the file extensions (without the leading dot) this codec
    /// handles.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Node;

    // Minimal codec used to exercise the trait surface
    struct KeyCountCodec;

    impl DocumentCodec for KeyCountCodec {
        fn parse(&self, content: &str) -> Result<Section> {
            let mut section = Section::new();
            for (i, line) in content.lines().enumerate() {
                section.insert(format!("line{}", i), Node::from(line));
            }
            Ok(section)
        }

        fn render(&self, root: &Section) -> Result<String> {
            Ok(format!("{} keys", root.len()))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["txt"]
        }
    }

    #[test]
    fn test_codec_parse() {
        let codec = KeyCountCodec;
        let section = codec.parse("a\nb").unwrap();
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn test_codec_render() {
        let codec = KeyCountCodec;
        let mut section = Section::new();
        section.insert("k", 1);
        assert_eq!(codec.render(&section).unwrap(), "1 keys");
    }

    #[test]
    fn test_codec_supported_extensions() {
        let codec = KeyCountCodec;
        assert_eq!(codec.supported_extensions(), &["txt"]);
    }

    #[test]
    fn test_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn DocumentCodec>>();
    }
}
