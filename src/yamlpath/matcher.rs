//! Cursor locators that decide whether a node sits under the cursor.

use crate::document::node::Node;
use std::fmt;

/// A predicate over tree nodes, plus a description for diagnostics.
///
/// Matchers are pure: they never mutate or remember the nodes they test.
/// The [`fmt::Display`] output is what `TokenNotFound` reports.
pub trait NodeMatcher: fmt::Display {
    /// Returns true if `node` lies under the cursor this matcher describes.
    fn matches(&self, node: &Node) -> bool;

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// A cursor position in source text.
///
/// # Example
///
/// ```
/// use yaml_path::document::node::Node;
/// use yaml_path::yamlpath::matcher::{Locator, NodeMatcher};
///
/// let val2 = Node::scalar(5, 14, "val2");
///
/// assert!(Locator::Line(5).matches(&val2));
/// assert!(Locator::LineColumn { line: 5, column: 17 }.matches(&val2));
/// assert!(!Locator::LineColumn { line: 5, column: 18 }.matches(&val2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Any token on the line. The resolver picks the leftmost one.
    Line(usize),
    /// The token on `line` whose half-open column range `[column, column + width)`
    /// contains `column`.
    LineColumn { line: usize, column: usize },
}

impl Locator {
    /// Builds a locator from a line and an optional column; `0` means no column.
    pub fn new(line: usize, column: usize) -> Self {
        match column {
            0 => Locator::Line(line),
            column => Locator::LineColumn { line, column },
        }
    }

    pub fn line(&self) -> usize {
        match *self {
            Locator::Line(line) | Locator::LineColumn { line, .. } => line,
        }
    }
}

impl NodeMatcher for Locator {
    fn matches(&self, node: &Node) -> bool {
        match *self {
            Locator::Line(line) => node.line() == line,
            Locator::LineColumn { line, column } => {
                node.line() == line
                    && node.column() <= column
                    && column < node.column() + node.width()
            }
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Line(line) => write!(f, "{{line: {}}}", line),
            Locator::LineColumn { line, column } => {
                write!(f, "{{line: {}, col: {}}}", line, column)
            }
        }
    }
}
