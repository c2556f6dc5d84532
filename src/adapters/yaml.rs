// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document codec adapter.
//!
//! This module provides the codec that parses YAML text into a configuration
//! tree and renders a tree back to YAML. Parsing is delegated to `serde_yaml`;
//! rendering is done by a block-style emitter so that comments attached to
//! keys can be written out, which `serde_yaml` cannot do.

use crate::domain::{ConfigError, Node, Result, Scalar, Section};
use crate::ports::DocumentCodec;

/// YAML codec implementation.
///
/// Parsing accepts any YAML document whose root is a mapping (an empty or
/// null document becomes an empty root). Mapping order is preserved, and
/// duplicate keys are rejected by the parser.
///
/// Rendering produces block-style YAML with two-space indentation. Keys keep
/// their insertion order, comment lines are emitted as `#` lines above their
/// key, and strings that could reparse as something else (booleans, numbers,
/// null, or YAML-significant punctuation) are double-quoted. Output always
/// reparses to an equal tree.
///
/// # Examples
///
/// ```
/// use config_api::adapters::YamlCodec;
/// use config_api::ports::DocumentCodec;
///
/// let codec = YamlCodec::new();
/// let root = codec.parse("server:\n  host: localhost\n  port: 5432\n").unwrap();
/// let rendered = codec.render(&root).unwrap();
/// assert_eq!(rendered, "server:\n  host: localhost\n  port: 5432\n");
/// ```
#[derive(Debug, Clone)]
pub struct YamlCodec;

impl YamlCodec {
    /// Creates a new YAML codec.
    pub fn new() -> Self {
        YamlCodec
    }
}

impl Default for YamlCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCodec for YamlCodec {
    fn parse(&self, content: &str) -> Result<Section> {
        if content.trim().is_empty() {
            return Ok(Section::new());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Null => Ok(Section::new()),
            serde_yaml::Value::Mapping(mapping) => Section::from_yaml_mapping(&mapping),
            other => Err(ConfigError::parse(format!(
                "document root must be a mapping, found {}",
                yaml_kind(&other)
            ))),
        }
    }

    fn render(&self, root: &Section) -> Result<String> {
        let mut out = String::new();
        emit_section(root, 0, &mut out);
        Ok(out)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

fn emit_section(section: &Section, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    for (key, node) in section.iter() {
        if let Some(lines) = section.comment(key) {
            for line in lines {
                if line.is_empty() {
                    out.push_str(&format!("{}#\n", pad));
                } else {
                    out.push_str(&format!("{}# {}\n", pad, line));
                }
            }
        }
        let key = emit_string(key);
        match node {
            Node::Scalar(scalar) => {
                out.push_str(&format!("{}{}: {}\n", pad, key, emit_scalar(scalar)));
            }
            Node::Section(sub) if sub.is_empty() => {
                out.push_str(&format!("{}{}: {{}}\n", pad, key));
            }
            Node::Section(sub) => {
                out.push_str(&format!("{}{}:\n", pad, key));
                emit_section(sub, indent + 2, out);
            }
            Node::List(items) if items.is_empty() => {
                out.push_str(&format!("{}{}: []\n", pad, key));
            }
            Node::List(items) => {
                out.push_str(&format!("{}{}:\n", pad, key));
                emit_list(items, indent + 2, out);
            }
        }
    }
}

fn emit_list(items: &[Node], indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    for item in items {
        match item {
            Node::Scalar(scalar) => {
                out.push_str(&format!("{}- {}\n", pad, emit_scalar(scalar)));
            }
            Node::Section(sub) if sub.is_empty() => {
                out.push_str(&format!("{}- {{}}\n", pad));
            }
            // a lone dash with the mapping indented beneath keeps comment
            // lines and nesting unambiguous
            Node::Section(sub) => {
                out.push_str(&format!("{}-\n", pad));
                emit_section(sub, indent + 2, out);
            }
            Node::List(inner) if inner.is_empty() => {
                out.push_str(&format!("{}- []\n", pad));
            }
            Node::List(inner) => {
                out.push_str(&format!("{}-\n", pad));
                emit_list(inner, indent + 2, out);
            }
        }
    }
}

fn emit_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Null => "null".to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => emit_float(*f),
        Scalar::Str(s) => emit_string(s),
    }
}

fn emit_float(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f == f64::INFINITY {
        ".inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        format!("{:?}", f)
    }
}

fn emit_string(s: &str) -> String {
    if needs_quoting(s) {
        quote(s)
    } else {
        s.to_string()
    }
}

// Conservative: anything that could reparse as a non-string, or that touches
// YAML syntax, gets double-quoted. Over-quoting is harmless.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let lowered = s.to_ascii_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "~" | "nan" | "inf" | "infinity"
    ) {
        return true;
    }
    let first = s.chars().next().unwrap_or(' ');
    if !(first.is_alphabetic() || first == '_' || first == '/') {
        return true;
    }
    if s.ends_with(' ') {
        return true;
    }
    s.chars().any(|c| {
        c.is_control()
            || matches!(
                c,
                ':' | '#'
                    | '"'
                    | '\''
                    | '\\'
                    | '{'
                    | '}'
                    | '['
                    | ']'
                    | ','
                    | '&'
                    | '*'
                    | '!'
                    | '|'
                    | '>'
                    | '%'
                    | '@'
                    | '`'
            )
    })
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
