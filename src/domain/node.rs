// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration document tree.
//!
//! This module provides the `Node` and `Section` types that make up an
//! in-memory configuration document. A `Section` is an insertion-ordered
//! mapping from keys to child nodes and exclusively owns its children; a
//! `Node` is either a scalar leaf, a list, or a nested section.
//!
//! Path-based reads and writes live here as well: reads walk the tree without
//! modifying it, while writes create missing intermediate sections along the
//! way.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::key_path::KeyPath;
use crate::domain::scalar::Scalar;
use indexmap::IndexMap;

/// A node in a configuration document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A typed leaf value.
    Scalar(Scalar),
    /// An ordered sequence of nodes.
    List(Vec<Node>),
    /// A nested section.
    Section(Section),
}

impl Node {
    /// Returns a short name for the node's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(s) => s.kind(),
            Node::List(_) => "list",
            Node::Section(_) => "section",
        }
    }

    /// Returns the scalar value, if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the section, if this node is one.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Node::Section(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the section mutably, if this node is one.
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Node::Section(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items, if this node is a list.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Builds a node from a parsed YAML value.
    ///
    /// Mapping keys must be scalars; string keys are taken as-is while number
    /// and boolean keys are stringified. YAML tags are not supported.
    pub fn from_yaml(value: &serde_yaml::Value) -> Result<Node> {
        match value {
            serde_yaml::Value::Null => Ok(Node::Scalar(Scalar::Null)),
            serde_yaml::Value::Bool(b) => Ok(Node::Scalar(Scalar::Bool(*b))),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Node::Scalar(Scalar::Int(i)))
                } else if let Some(f) = n.as_f64() {
                    Ok(Node::Scalar(Scalar::Float(f)))
                } else {
                    Err(ConfigError::parse(format!("unrepresentable number: {}", n)))
                }
            }
            serde_yaml::Value::String(s) => Ok(Node::Scalar(Scalar::Str(s.clone()))),
            serde_yaml::Value::Sequence(seq) => {
                let items = seq.iter().map(Node::from_yaml).collect::<Result<_>>()?;
                Ok(Node::List(items))
            }
            serde_yaml::Value::Mapping(map) => {
                Ok(Node::Section(Section::from_yaml_mapping(map)?))
            }
            serde_yaml::Value::Tagged(tagged) => Err(ConfigError::parse(format!(
                "YAML tags are not supported: {}",
                tagged.tag
            ))),
        }
    }

    /// Converts the node back into a YAML value, preserving order.
    pub fn to_yaml(&self) -> serde_yaml::Value {
        match self {
            Node::Scalar(Scalar::Null) => serde_yaml::Value::Null,
            Node::Scalar(Scalar::Bool(b)) => serde_yaml::Value::Bool(*b),
            Node::Scalar(Scalar::Int(i)) => {
                serde_yaml::Value::Number(serde_yaml::Number::from(*i))
            }
            Node::Scalar(Scalar::Float(f)) => {
                serde_yaml::Value::Number(serde_yaml::Number::from(*f))
            }
            Node::Scalar(Scalar::Str(s)) => serde_yaml::Value::String(s.clone()),
            Node::List(items) => {
                serde_yaml::Value::Sequence(items.iter().map(Node::to_yaml).collect())
            }
            Node::Section(section) => serde_yaml::Value::Mapping(section.to_yaml_mapping()),
        }
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

impl From<Section> for Node {
    fn from(s: Section) -> Self {
        Node::Section(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::from(b))
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Scalar(Scalar::from(i))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Scalar(Scalar::from(i))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Scalar(Scalar::from(f))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::from(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::from(s))
    }
}

/// An insertion-ordered mapping of keys to child nodes.
///
/// Sections own their children exclusively and keep keys in the order they
/// were first inserted, so a document round-trips without reordering. Each
/// key may carry comment lines, emitted above the key on serialization.
///
/// # Examples
///
/// ```
/// use config_api::domain::{KeyPath, Node, Section};
///
/// let mut root = Section::new();
/// let path = KeyPath::from_dotted("server.port").unwrap();
/// root.set_path(&path, 8080);
///
/// let node = root.resolve(&path).unwrap();
/// assert_eq!(node, &Node::from(8080));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    values: IndexMap<String, Node>,
    comments: IndexMap<String, Vec<String>>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Section::default()
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the section has no children.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if the section has a direct child with this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterates over the direct child keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over the direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the direct child with this key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.values.get(key)
    }

    /// Returns the direct child with this key mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.values.get_mut(key)
    }

    /// Inserts a direct child, returning the displaced node if any.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.values.insert(key.into(), node.into())
    }

    /// Removes a direct child and its comment, preserving the order of the
    /// remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.comments.shift_remove(key);
        self.values.shift_remove(key)
    }

    /// Returns the comment lines attached to a direct child key.
    pub fn comment(&self, key: &str) -> Option<&[String]> {
        self.comments.get(key).map(Vec::as_slice)
    }

    /// Attaches comment lines to a direct child key.
    ///
    /// The lines are emitted as `#` comments above the key when the document
    /// is rendered. Comments for keys that are never inserted are ignored at
    /// render time.
    pub fn set_comment(&mut self, key: impl Into<String>, lines: Vec<String>) {
        self.comments.insert(key.into(), lines);
    }

    /// Removes the comment attached to a direct child key.
    pub fn remove_comment(&mut self, key: &str) -> Option<Vec<String>> {
        self.comments.shift_remove(key)
    }

    /// Resolves a path to a node, without modifying the tree.
    ///
    /// Returns `None` if any segment is missing or a non-section node stands
    /// where an intermediate section is needed.
    pub fn resolve(&self, path: &KeyPath) -> Option<&Node> {
        let (parents, leaf) = path.split_leaf();
        let mut current = self;
        for segment in parents {
            current = match current.get(segment) {
                Some(Node::Section(section)) => section,
                _ => return None,
            };
        }
        current.get(leaf)
    }

    /// Resolves a path to a node mutably, without creating anything.
    pub fn resolve_mut(&mut self, path: &KeyPath) -> Option<&mut Node> {
        let (parents, leaf) = path.split_leaf();
        let mut current = self;
        for segment in parents {
            current = match current.get_mut(segment) {
                Some(Node::Section(section)) => section,
                _ => return None,
            };
        }
        current.get_mut(leaf)
    }

    /// Returns the section at `path`, creating missing intermediate sections.
    ///
    /// A non-section node standing anywhere along the path is replaced by a
    /// fresh section; writes win over stale values.
    pub fn ensure_section(&mut self, path: &KeyPath) -> &mut Section {
        let mut current = self;
        for segment in path.segments() {
            current = current.ensure_child(segment);
        }
        current
    }

    /// Sets the node at `path`, creating missing intermediate sections.
    ///
    /// Returns the displaced node, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_api::domain::{KeyPath, Section};
    ///
    /// let mut root = Section::new();
    /// let path = KeyPath::from_dotted("database.pool.size").unwrap();
    /// root.set_path(&path, 10);
    ///
    /// assert!(root.get("database").unwrap().as_section().is_some());
    /// ```
    pub fn set_path(&mut self, path: &KeyPath, node: impl Into<Node>) -> Option<Node> {
        let (parents, leaf) = path.split_leaf();
        let mut current = self;
        for segment in parents {
            current = current.ensure_child(segment);
        }
        current.insert(leaf, node)
    }

    /// Removes the node at `path`, returning it if present.
    pub fn remove_path(&mut self, path: &KeyPath) -> Option<Node> {
        let (parents, leaf) = path.split_leaf();
        let mut current = self;
        for segment in parents {
            current = match current.get_mut(segment) {
                Some(Node::Section(section)) => section,
                _ => return None,
            };
        }
        current.remove(leaf)
    }

    /// Copies entries from `defaults` that are missing here, recursively.
    ///
    /// Existing values always win over defaults. Comments attached to default
    /// keys are carried along for keys that have none.
    pub fn merge_defaults(&mut self, defaults: &Section) {
        for (key, default_node) in defaults.iter() {
            match self.values.get_mut(key) {
                Some(Node::Section(existing)) => {
                    if let Node::Section(default_section) = default_node {
                        existing.merge_defaults(default_section);
                    }
                }
                Some(_) => {}
                None => {
                    self.values.insert(key.to_string(), default_node.clone());
                }
            }
            if !self.comments.contains_key(key) {
                if let Some(lines) = defaults.comment(key) {
                    self.comments.insert(key.to_string(), lines.to_vec());
                }
            }
        }
    }

    /// Drops entries that have no counterpart in `defaults`, recursively.
    pub fn retain_known(&mut self, defaults: &Section) {
        self.values.retain(|key, _| defaults.contains_key(key));
        let values = &self.values;
        self.comments.retain(|key, _| values.contains_key(key));
        for (key, node) in self.values.iter_mut() {
            if let Node::Section(section) = node {
                if let Some(Node::Section(default_section)) = defaults.get(key) {
                    section.retain_known(default_section);
                }
            }
        }
    }

    /// Builds a section from a parsed YAML mapping, preserving key order.
    pub fn from_yaml_mapping(mapping: &serde_yaml::Mapping) -> Result<Section> {
        let mut section = Section::new();
        for (key, value) in mapping {
            let key = match key {
                serde_yaml::Value::String(s) => s.clone(),
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ConfigError::parse(format!(
                        "unsupported mapping key of type {:?}",
                        other
                    )))
                }
            };
            section.insert(key, Node::from_yaml(value)?);
        }
        Ok(section)
    }

    /// Converts the section into a YAML mapping, preserving key order.
    pub fn to_yaml_mapping(&self) -> serde_yaml::Mapping {
        let mut mapping = serde_yaml::Mapping::new();
        for (key, node) in self.iter() {
            mapping.insert(serde_yaml::Value::String(key.to_string()), node.to_yaml());
        }
        mapping
    }

    fn ensure_child(&mut self, key: &str) -> &mut Section {
        let entry = self
            .values
            .entry(key.to_string())
            .or_insert_with(|| Node::Section(Section::new()));
        if !matches!(entry, Node::Section(_)) {
            *entry = Node::Section(Section::new());
        }
        match entry {
            Node::Section(section) => section,
            // replaced above, a section is guaranteed
            _ => unreachable!(),
        }
    }
}
