// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration document and its builder.
//!
//! This module provides `ConfigDocument`, which composes a document store and
//! a codec into a loadable, addressable, persistable configuration tree, and
//! `DocumentBuilder` for constructing one.

use crate::adapters::YamlCodec;
use crate::domain::{ConfigError, KeyPath, Node, Result, Scalar, Section};
use crate::ports::{DocumentCodec, DocumentStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A file-backed configuration document.
///
/// A document owns an in-memory tree loaded from its backing store, an
/// optional defaults tree, and the codec that translates between text and
/// tree. Reads address nodes by dotted path and fall back to defaults for
/// missing keys; writes create intermediate sections as needed. `save`
/// persists the tree atomically, first folding defaults into it so the file
/// on disk is self-describing.
///
/// # Examples
///
/// ```
/// use config_api::document::ConfigDocument;
///
/// # fn main() -> config_api::domain::Result<()> {
/// let dir = tempfile::tempdir()?;
/// let mut config = ConfigDocument::builder()
///     .with_path(dir.path().join("config.yaml"))
///     .with_defaults("server:\n  host: localhost\n  port: 8080\n")
///     .build()?;
///
/// // missing file: reads come from the defaults
/// assert_eq!(config.get_i64("server.port")?, 8080);
///
/// // writes create intermediate sections
/// config.set("server.tls.enabled", true)?;
/// config.save()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigDocument {
    store: Box<dyn DocumentStore>,
    codec: Box<dyn DocumentCodec>,
    root: Section,
    defaults: Option<Section>,
    write_defaults: bool,
    prune_unknown: bool,
}

impl ConfigDocument {
    /// Creates a new document builder.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Loads a document from a YAML file with no defaults.
    ///
    /// Equivalent to `ConfigDocument::builder().with_path(path).build()`.
    pub fn load(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Self::builder().with_path(path).build()
    }

    /// Returns the document's root section.
    pub fn root(&self) -> &Section {
        &self.root
    }

    /// Returns the document's root section mutably.
    pub fn root_mut(&mut self) -> &mut Section {
        &mut self.root
    }

    /// Returns the defaults tree, if one was configured.
    pub fn defaults(&self) -> Option<&Section> {
        self.defaults.as_ref()
    }

    /// Returns a human-readable description of the backing store.
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Resolves a dotted path to a node.
    ///
    /// The document tree is consulted first, then the defaults tree.
    pub fn get(&self, path: &str) -> Result<&Node> {
        let key_path = KeyPath::from_dotted(path)?;
        if let Some(node) = self.root.resolve(&key_path) {
            return Ok(node);
        }
        if let Some(defaults) = &self.defaults {
            if let Some(node) = defaults.resolve(&key_path) {
                return Ok(node);
            }
        }
        Err(ConfigError::KeyNotFound {
            key: path.to_string(),
        })
    }

    /// Resolves a dotted path to a scalar leaf.
    pub fn get_scalar(&self, path: &str) -> Result<&Scalar> {
        match self.get(path)? {
            Node::Scalar(scalar) => Ok(scalar),
            other => Err(ConfigError::TypeMismatch {
                key: path.to_string(),
                expected: "scalar",
                found: other.kind(),
            }),
        }
    }

    /// Returns the string at `path`.
    pub fn get_string(&self, path: &str) -> Result<String> {
        Ok(self.get_scalar(path)?.as_str(path)?.to_string())
    }

    /// Returns the string at `path`, or `default` if the key is missing.
    pub fn get_string_or(&self, path: &str, default: &str) -> Result<String> {
        match self.get_string(path) {
            Err(ConfigError::KeyNotFound { .. }) => Ok(default.to_string()),
            other => other,
        }
    }

    /// Returns the boolean at `path`.
    pub fn get_bool(&self, path: &str) -> Result<bool> {
        self.get_scalar(path)?.as_bool(path)
    }

    /// Returns the boolean at `path`, or `default` if the key is missing.
    pub fn get_bool_or(&self, path: &str, default: bool) -> Result<bool> {
        match self.get_bool(path) {
            Err(ConfigError::KeyNotFound { .. }) => Ok(default),
            other => other,
        }
    }

    /// Returns the integer at `path`.
    pub fn get_i64(&self, path: &str) -> Result<i64> {
        self.get_scalar(path)?.as_i64(path)
    }

    /// Returns the integer at `path`, or `default` if the key is missing.
    pub fn get_i64_or(&self, path: &str, default: i64) -> Result<i64> {
        match self.get_i64(path) {
            Err(ConfigError::KeyNotFound { .. }) => Ok(default),
            other => other,
        }
    }

    /// Returns the unsigned integer at `path`.
    pub fn get_u64(&self, path: &str) -> Result<u64> {
        self.get_scalar(path)?.as_u64(path)
    }

    /// Returns the unsigned integer at `path`, or `default` if the key is
    /// missing.
    pub fn get_u64_or(&self, path: &str, default: u64) -> Result<u64> {
        match self.get_u64(path) {
            Err(ConfigError::KeyNotFound { .. }) => Ok(default),
            other => other,
        }
    }

    /// Returns the float at `path`.
    pub fn get_f64(&self, path: &str) -> Result<f64> {
        self.get_scalar(path)?.as_f64(path)
    }

    /// Returns the float at `path`, or `default` if the key is missing.
    pub fn get_f64_or(&self, path: &str, default: f64) -> Result<f64> {
        match self.get_f64(path) {
            Err(ConfigError::KeyNotFound { .. }) => Ok(default),
            other => other,
        }
    }

    /// Returns the list of strings at `path`.
    ///
    /// Every element must be a string scalar.
    pub fn get_string_list(&self, path: &str) -> Result<Vec<String>> {
        match self.get(path)? {
            Node::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_key = format!("{}.{}", path, i);
                    match item {
                        Node::Scalar(scalar) => Ok(scalar.as_str(&item_key)?.to_string()),
                        other => Err(ConfigError::TypeMismatch {
                            key: item_key,
                            expected: "string",
                            found: other.kind(),
                        }),
                    }
                })
                .collect(),
            other => Err(ConfigError::TypeMismatch {
                key: path.to_string(),
                expected: "list",
                found: other.kind(),
            }),
        }
    }

    /// Deserializes the subtree at `path` into any `Deserialize` type.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_api::document::ConfigDocument;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// # fn main() -> config_api::domain::Result<()> {
    /// let dir = tempfile::tempdir()?;
    /// let config = ConfigDocument::builder()
    ///     .with_path(dir.path().join("config.yaml"))
    ///     .with_defaults("server:\n  host: localhost\n  port: 8080\n")
    ///     .build()?;
    ///
    /// let server: Server = config.get_as("server")?;
    /// assert_eq!(server.host, "localhost");
    /// assert_eq!(server.port, 8080);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let node = self.get(path)?;
        serde_yaml::from_value(node.to_yaml()).map_err(|e| ConfigError::TypeConversionError {
            key: path.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(e),
        })
    }

    /// Sets the node at `path`, creating intermediate sections as needed.
    ///
    /// Returns the displaced node, if any. The change is in-memory until
    /// [`save`](Self::save) is called.
    pub fn set(&mut self, path: &str, value: impl Into<Node>) -> Result<Option<Node>> {
        let key_path = KeyPath::from_dotted(path)?;
        Ok(self.root.set_path(&key_path, value))
    }

    /// Serializes a value into the tree at `path`.
    pub fn set_from<T: Serialize>(&mut self, path: &str, value: &T) -> Result<()> {
        let key_path = KeyPath::from_dotted(path)?;
        let yaml = serde_yaml::to_value(value).map_err(|e| ConfigError::TypeConversionError {
            key: path.to_string(),
            target_type: "YAML value".to_string(),
            source: Box::new(e),
        })?;
        let node = Node::from_yaml(&yaml)?;
        self.root.set_path(&key_path, node);
        Ok(())
    }

    /// Removes the node at `path` from the document tree, returning it.
    ///
    /// Defaults are unaffected, so a removed key reads as its default again.
    pub fn remove(&mut self, path: &str) -> Result<Option<Node>> {
        let key_path = KeyPath::from_dotted(path)?;
        Ok(self.root.remove_path(&key_path))
    }

    /// Returns `true` if `path` resolves in the document tree or defaults.
    pub fn contains(&self, path: &str) -> bool {
        match KeyPath::from_dotted(path) {
            Ok(key_path) => {
                self.root.resolve(&key_path).is_some()
                    || self
                        .defaults
                        .as_ref()
                        .is_some_and(|d| d.resolve(&key_path).is_some())
            }
            Err(_) => false,
        }
    }

    /// Returns the section at `path`.
    pub fn section(&self, path: &str) -> Result<&Section> {
        match self.get(path)? {
            Node::Section(section) => Ok(section),
            other => Err(ConfigError::TypeMismatch {
                key: path.to_string(),
                expected: "section",
                found: other.kind(),
            }),
        }
    }

    /// Returns the direct child keys of the section at `path`, in order.
    pub fn keys(&self, path: &str) -> Result<Vec<String>> {
        Ok(self.section(path)?.keys().map(str::to_string).collect())
    }

    /// Attaches comment lines to the key at `path`.
    ///
    /// The key must already exist in the document tree. Comments are emitted
    /// above the key on the next save.
    pub fn set_comment(&mut self, path: &str, lines: Vec<String>) -> Result<()> {
        let key_path = KeyPath::from_dotted(path)?;
        let (parents, leaf) = key_path.split_leaf();
        let mut current = &mut self.root;
        for segment in parents {
            current = match current.get_mut(segment) {
                Some(Node::Section(section)) => section,
                _ => {
                    return Err(ConfigError::KeyNotFound {
                        key: path.to_string(),
                    })
                }
            };
        }
        if !current.contains_key(leaf) {
            return Err(ConfigError::KeyNotFound {
                key: path.to_string(),
            });
        }
        current.set_comment(leaf, lines);
        Ok(())
    }

    /// Renders the tree and writes it to the backing store atomically.
    ///
    /// When the document has defaults and `write_defaults` is enabled
    /// (the default), missing keys are first filled in from the defaults so
    /// the saved file is complete. With `prune_unknown` enabled, keys with no
    /// counterpart in the defaults are dropped instead of persisted.
    pub fn save(&mut self) -> Result<()> {
        if self.write_defaults {
            if let Some(defaults) = self.defaults.as_ref() {
                self.root.merge_defaults(defaults);
            }
        }
        if self.prune_unknown {
            if let Some(defaults) = self.defaults.as_ref() {
                self.root.retain_known(defaults);
            }
        }
        let content = self.codec.render(&self.root)?;
        self.store.persist(&content)?;
        tracing::debug!(location = %self.store.location(), "configuration saved");
        Ok(())
    }

    /// Replaces the in-memory tree with the current store content.
    ///
    /// Unsaved in-memory changes are discarded. A missing backing file
    /// resets the tree to empty (reads then fall back to defaults).
    pub fn reload(&mut self) -> Result<()> {
        self.root = match self.store.load()? {
            Some(content) => self.codec.parse(&content)?,
            None => {
                tracing::warn!(
                    location = %self.store.location(),
                    "configuration file missing on reload"
                );
                Section::new()
            }
        };
        tracing::debug!(location = %self.store.location(), "configuration reloaded");
        Ok(())
    }
}

/// Builder for constructing a [`ConfigDocument`].
///
/// # Examples
///
/// ```rust,no_run
/// use config_api::document::ConfigDocument;
///
/// # fn main() -> config_api::domain::Result<()> {
/// let config = ConfigDocument::builder()
///     .with_path("/etc/myapp/config.yaml")
///     .with_defaults("log_level: info\n")
///     .prune_unknown(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct DocumentBuilder {
    store: Option<Box<dyn DocumentStore>>,
    codec: Option<Box<dyn DocumentCodec>>,
    defaults: Option<String>,
    write_defaults: bool,
    prune_unknown: bool,
}

impl DocumentBuilder {
    /// Creates a new builder with no store, the YAML codec, and no defaults.
    pub fn new() -> Self {
        Self {
            store: None,
            codec: None,
            defaults: None,
            write_defaults: true,
            prune_unknown: false,
        }
    }

    /// Backs the document with a file at the given path.
    pub fn with_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.store = Some(Box::new(crate::adapters::FileStore::new(path)));
        self
    }

    /// Backs the document with a custom store.
    pub fn with_store(mut self, store: Box<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses a custom codec instead of the YAML codec.
    pub fn with_codec(mut self, codec: Box<dyn DocumentCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Supplies the document's defaults as YAML text.
    ///
    /// The text is parsed with the document's codec at build time.
    pub fn with_defaults(mut self, defaults: impl Into<String>) -> Self {
        self.defaults = Some(defaults.into());
        self
    }

    /// Controls whether missing keys are filled from defaults on save.
    ///
    /// Enabled by default.
    pub fn write_defaults(mut self, enabled: bool) -> Self {
        self.write_defaults = enabled;
        self
    }

    /// Controls whether keys absent from the defaults are dropped on save.
    ///
    /// Disabled by default. Has no effect without defaults.
    pub fn prune_unknown(mut self, enabled: bool) -> Self {
        self.prune_unknown = enabled;
        self
    }

    /// Loads the store and builds the document.
    ///
    /// A missing backing file is not an error: the tree starts out empty and
    /// reads fall back to the defaults until the first save.
    pub fn build(self) -> Result<ConfigDocument> {
        let codec = self
            .codec
            .unwrap_or_else(|| Box::new(YamlCodec::new()) as Box<dyn DocumentCodec>);
        let store = self.store.ok_or_else(|| ConfigError::StoreError {
            location: "<unconfigured>".to_string(),
            message: "No backing store configured".to_string(),
            source: None,
        })?;

        let defaults = match self.defaults {
            Some(text) => Some(codec.parse(&text)?),
            None => None,
        };

        let root = match store.load()? {
            Some(content) => codec.parse(&content)?,
            None => Section::new(),
        };

        tracing::debug!(
            location = %store.location(),
            keys = root.len(),
            "configuration loaded"
        );

        Ok(ConfigDocument {
            store,
            codec,
            root,
            defaults,
            write_defaults: self.write_defaults,
            prune_unknown: self.prune_unknown,
        })
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
