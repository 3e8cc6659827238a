//! Rendering resolved paths as text.
//!
//! Two grammars are supported:
//!
//! - **bosh** (`/top/first/name=myname/attr2`): separator-delimited keys and
//!   indices, where a sequence element may be named by a unique attribute.
//! - **jsonpath** (`$.top.first[0].attr2`): dotted keys and bracketed indices.
//!
//! Both walk the path root-first. A mapping entry takes the key that follows
//! it; a sequence entry looks at the element that follows it to find its
//! index. Leaves are not printed on their own, the key or index that led to
//! them already names them.

use super::error::{Result, YamlPathError};
use super::path::ResolvedPath;
use crate::document::node::{Node, NodeKind};
use std::iter::Peekable;
use std::str::FromStr;

/// Renders a [`ResolvedPath`] as a string.
pub trait PathFormatter {
    /// # Errors
    ///
    /// Returns [`YamlPathError::InvalidPathShape`] when the path does not
    /// follow the document → container → key/element → leaf shape.
    fn format(&self, path: &ResolvedPath<'_>) -> Result<String>;
}

/// Options for the bosh grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashOptions {
    /// Printed before every segment.
    pub separator: String,
    /// Mapping key used to name sequence elements. Empty disables naming.
    pub name_attribute: String,
}

impl Default for SlashOptions {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            name_attribute: "name".to_string(),
        }
    }
}

/// Formatter for the bosh (slash) grammar.
///
/// # Example
///
/// ```
/// use yaml_path::document::parser::parse_documents;
/// use yaml_path::yamlpath::formatter::{PathFormatter, SlashFormatter};
/// use yaml_path::yamlpath::matcher::Locator;
/// use yaml_path::yamlpath::resolver::resolve_documents;
///
/// let docs = parse_documents("jobs:\n  - name: web\n    port: 80\n").unwrap();
/// let path = resolve_documents(&Locator::new(3, 11), &docs).unwrap();
///
/// let formatter = SlashFormatter::default();
/// assert_eq!(formatter.format(&path).unwrap(), "/jobs/name=web/port");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashFormatter {
    options: SlashOptions,
}

impl SlashFormatter {
    pub fn new(options: SlashOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SlashOptions {
        &self.options
    }
}

impl PathFormatter for SlashFormatter {
    fn format(&self, path: &ResolvedPath<'_>) -> Result<String> {
        let SlashOptions {
            separator,
            name_attribute,
        } = &self.options;

        let mut out = String::new();
        let mut nodes = path.iter().peekable();

        while let Some(node) = nodes.next() {
            match node.kind() {
                NodeKind::Sequence => {
                    let index = selected_index(node, &mut nodes)?;
                    match node.sequence_selection_by_key(index, name_attribute) {
                        Some(name) => {
                            out.push_str(&format!("{}{}={}", separator, name_attribute, name));
                        }
                        None => out.push_str(&format!("{}{}", separator, index)),
                    }
                }
                NodeKind::Mapping => {
                    let key = taken_key(node, &mut nodes)?;
                    out.push_str(separator);
                    out.push_str(key.value());
                }
                NodeKind::Document | NodeKind::Scalar | NodeKind::Alias => {}
            }
        }

        tracing::trace!(%path, formatted = %out, "formatted bosh path");
        Ok(out)
    }
}

/// Formatter for the jsonpath (dotted) grammar.
///
/// Sequence elements are always numbered; there is no name selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DottedFormatter;

impl PathFormatter for DottedFormatter {
    fn format(&self, path: &ResolvedPath<'_>) -> Result<String> {
        let mut out = String::new();
        let mut nodes = path.iter().peekable();

        while let Some(node) = nodes.next() {
            match node.kind() {
                NodeKind::Document => out.push('$'),
                NodeKind::Sequence => {
                    let index = selected_index(node, &mut nodes)?;
                    out.push_str(&format!("[{}]", index));
                }
                NodeKind::Mapping => {
                    let key = taken_key(node, &mut nodes)?;
                    out.push('.');
                    out.push_str(key.value());
                }
                NodeKind::Scalar | NodeKind::Alias => {}
            }
        }

        tracing::trace!(%path, formatted = %out, "formatted jsonpath path");
        Ok(out)
    }
}

/// Index of the element following `sequence` in the path. The element is
/// left in place so it can contribute its own segments.
fn selected_index<'a, I>(sequence: &Node, nodes: &mut Peekable<I>) -> Result<usize>
where
    I: Iterator<Item = &'a Node>,
{
    let element = nodes.peek().copied().ok_or_else(|| {
        YamlPathError::invalid_shape(format!("{} has no selected element", sequence))
    })?;

    sequence.position_of(element).ok_or_else(|| {
        YamlPathError::invalid_shape(format!("{} is not an element of {}", element, sequence))
    })
}

/// Consumes the key following `mapping` in the path.
fn taken_key<'a, I>(mapping: &Node, nodes: &mut Peekable<I>) -> Result<&'a Node>
where
    I: Iterator<Item = &'a Node>,
{
    let key = nodes.next().ok_or_else(|| {
        YamlPathError::invalid_shape(format!("{} has no selected key", mapping))
    })?;

    if !mapping.has_key_node(key) {
        return Err(YamlPathError::invalid_shape(format!(
            "{} is not a key of {}",
            key, mapping
        )));
    }
    Ok(key)
}

/// Output grammar identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFormat {
    /// `/top/first/name=myname/attr2`
    Bosh,
    /// `$.top.first[0].attr2`
    JsonPath,
}

impl PathFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathFormat::Bosh => "bosh",
            PathFormat::JsonPath => "jsonpath",
        }
    }

    /// Builds the formatter for this grammar. `options` only affects bosh.
    pub fn formatter(&self, options: SlashOptions) -> Box<dyn PathFormatter> {
        match self {
            PathFormat::Bosh => Box::new(SlashFormatter::new(options)),
            PathFormat::JsonPath => Box::new(DottedFormatter),
        }
    }
}

impl FromStr for PathFormat {
    type Err = YamlPathError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bosh" => Ok(PathFormat::Bosh),
            "jsonpath" => Ok(PathFormat::JsonPath),
            other => Err(YamlPathError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for PathFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
