//! Root-to-leaf node chains produced by the resolver.

use super::error::{Result, YamlPathError};
use crate::document::node::Node;
use std::fmt;

/// The ordered chain of nodes from a document down to the matched token.
///
/// The first entry is the outermost node (normally the `Document`), the last
/// is the matched leaf. Between them, every mapping is followed by the key
/// that was taken and every sequence by the element that was taken, so
/// formatters can recover names and indices by looking one entry ahead.
///
/// A `ResolvedPath` borrows the tree it was resolved against and is never
/// modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath<'a> {
    nodes: Vec<&'a Node>,
}

impl<'a> ResolvedPath<'a> {
    /// Wraps an already root-first chain of nodes.
    pub fn new(nodes: Vec<&'a Node>) -> Self {
        Self { nodes }
    }

    /// Builds a path from a leaf-first chain, reversing it once.
    pub(crate) fn from_reversed(mut nodes: Vec<&'a Node>) -> Self {
        nodes.reverse();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`YamlPathError::InvalidPathShape`] when `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&'a Node> {
        self.nodes.get(index).copied().ok_or_else(|| {
            YamlPathError::invalid_shape(format!("index out of range: {}", index))
        })
    }

    /// The outermost entry.
    pub fn root(&self) -> Option<&'a Node> {
        self.nodes.first().copied()
    }

    /// The matched token.
    pub fn leaf(&self) -> Option<&'a Node> {
        self.nodes.last().copied()
    }

    pub fn nodes(&self) -> &[&'a Node] {
        &self.nodes
    }

    /// Iterates the entries root-first.
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: self.nodes.iter(),
        }
    }
}

impl<'p, 'a> IntoIterator for &'p ResolvedPath<'a> {
    type Item = &'a Node;
    type IntoIter = Iter<'p, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Root-first iterator over a [`ResolvedPath`].
#[derive(Debug, Clone)]
pub struct Iter<'p, 'a> {
    inner: std::slice::Iter<'p, &'a Node>,
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl fmt::Display for ResolvedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node)?;
        }
        f.write_str("]")
    }
}
