//! Parsed YAML tree nodes with source positions.
//!
//! A [`Node`] is one element of a parsed document: a document wrapper, a
//! mapping, a sequence, a scalar, or an alias. Every node remembers the
//! 1-based line and column of its first character so that cursor positions
//! can be mapped back onto the tree.
//!
//! # Example
//!
//! ```
//! use yaml_path::document::node::{Node, NodeKind};
//!
//! let root = Node::mapping(1, 1, vec![
//!     Node::scalar(1, 1, "name"),
//!     Node::scalar(1, 7, "web"),
//! ]);
//! let doc = Node::document(1, 1, root);
//!
//! assert_eq!(doc.kind(), NodeKind::Document);
//! assert_eq!(doc.children()[0].child_value_by_key("name"), Some("web"));
//! ```

use std::fmt;

/// The closed set of node kinds a parse tree can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A single document; holds exactly one child, the root value.
    Document,
    /// A mapping; children alternate key and value nodes.
    Mapping,
    /// A sequence; children are the elements in order.
    Sequence,
    /// A scalar leaf.
    Scalar,
    /// An alias leaf (`*name`).
    Alias,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Document => "document",
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::Scalar => "scalar",
            NodeKind::Alias => "alias",
        };
        f.write_str(name)
    }
}

/// A node of a parsed YAML document.
///
/// Nodes are immutable once built. Children are owned, so a whole document
/// is a single tree owned by whoever parsed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    line: usize,
    column: usize,
    value: String,
    children: Vec<Node>,
}

impl Node {
    /// Creates a document node wrapping `root`.
    pub fn document(line: usize, column: usize, root: Node) -> Self {
        Self {
            kind: NodeKind::Document,
            line,
            column,
            value: String::new(),
            children: vec![root],
        }
    }

    /// Creates a mapping node. `children` must alternate key and value nodes.
    pub fn mapping(line: usize, column: usize, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Mapping,
            line,
            column,
            value: String::new(),
            children,
        }
    }

    /// Creates a sequence node.
    pub fn sequence(line: usize, column: usize, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Sequence,
            line,
            column,
            value: String::new(),
            children,
        }
    }

    /// Creates a scalar leaf.
    pub fn scalar(line: usize, column: usize, value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Scalar,
            line,
            column,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Creates an alias leaf. `name` is the anchor name without the leading `*`.
    pub fn alias(line: usize, column: usize, name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Alias,
            line,
            column,
            value: name.into(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// 1-based source line of the node's first character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based source column of the node's first character, in characters.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Raw text of a scalar or alias. Empty for containers.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of [`Node::value`] in characters.
    pub fn width(&self) -> usize {
        self.value.chars().count()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Scalar | NodeKind::Alias)
    }

    /// Iterates the key/value pairs of a mapping in document order.
    ///
    /// Yields nothing for any other kind.
    pub fn pairs(&self) -> impl Iterator<Item = (&Node, &Node)> {
        let children: &[Node] = match self.kind {
            NodeKind::Mapping => &self.children,
            _ => &[],
        };
        children.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Position of `child` among this node's children, compared by identity.
    pub fn position_of(&self, child: &Node) -> Option<usize> {
        self.children
            .iter()
            .position(|candidate| std::ptr::eq(candidate, child))
    }

    /// Returns true if `key` is one of this mapping's key nodes (by identity).
    pub fn has_key_node(&self, key: &Node) -> bool {
        self.pairs().any(|(candidate, _)| std::ptr::eq(candidate, key))
    }

    /// Looks up the scalar value stored under `key` in a mapping.
    ///
    /// The first pair whose key text equals `key` wins. Returns `None` when
    /// this node is not a mapping, the key is absent, the value is not a
    /// scalar, or the value is empty.
    pub fn child_value_by_key(&self, key: &str) -> Option<&str> {
        let (_, value) = self.pairs().find(|(k, _)| k.value == key)?;
        match value.kind {
            NodeKind::Scalar if !value.value.is_empty() => Some(value.value.as_str()),
            _ => None,
        }
    }

    /// Returns the `key` value of the element at `index` of a sequence, but
    /// only if no other element of the sequence carries the same value.
    ///
    /// This is the selector used to name sequence elements (`name=web`)
    /// instead of numbering them.
    pub fn sequence_selection_by_key(&self, index: usize, key: &str) -> Option<&str> {
        if self.kind != NodeKind::Sequence || key.is_empty() {
            return None;
        }

        let candidate = self.children.get(index)?.child_value_by_key(key)?;
        let holders = self
            .children
            .iter()
            .filter(|element| element.child_value_by_key(key) == Some(candidate))
            .count();

        (holders == 1).then_some(candidate)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.kind, self.line, self.column)?;
        if self.is_leaf() {
            write!(f, "({:?})", self.value)?;
        }
        Ok(())
    }
}
