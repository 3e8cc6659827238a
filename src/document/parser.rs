//! YAML parsing into position-carrying node trees.
//!
//! This module turns YAML source text into one [`Node`] tree per document.
//! It drives `yaml-rust2`'s event parser with a [`MarkedEventReceiver`] that
//! keeps a stack of half-built containers, so every node records where in the
//! source it started.
//!
//! # Example
//!
//! ```
//! use yaml_path::document::parser::parse_documents;
//! use yaml_path::document::node::NodeKind;
//!
//! let docs = parse_documents("top:\n  - a\n---\nother: b\n").unwrap();
//! assert_eq!(docs.len(), 2);
//! assert_eq!(docs[0].kind(), NodeKind::Document);
//! ```

use super::node::Node;
use crate::yamlpath::error::{Result, YamlPathError};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parses every document in `source`.
///
/// Returns one `Document` node per document in the stream, in order. An
/// empty stream yields an empty vector.
///
/// # Errors
///
/// Returns [`YamlPathError::ParseFailure`] when the source is not valid YAML.
///
/// ```
/// use yaml_path::document::parser::parse_documents;
///
/// assert!(parse_documents("top: -").is_err());
/// ```
pub fn parse_documents(source: &str) -> Result<Vec<Node>> {
    let mut parser = Parser::new_from_str(source);
    let mut builder = TreeBuilder::new(source);

    parser.load(&mut builder, true)?;

    let documents = builder.finish()?;
    tracing::debug!(documents = documents.len(), "parsed yaml stream");
    Ok(documents)
}

/// A container still waiting for its end event.
enum Frame {
    Mapping {
        line: usize,
        column: usize,
        children: Vec<Node>,
    },
    Sequence {
        line: usize,
        column: usize,
        children: Vec<Node>,
    },
}

/// Event receiver that assembles [`Node`] trees.
struct TreeBuilder<'a> {
    lines: Vec<&'a str>,
    stack: Vec<Frame>,
    root: Option<Node>,
    documents: Vec<Node>,
    error: Option<String>,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            stack: Vec::new(),
            root: None,
            documents: Vec::new(),
            error: None,
        }
    }

    fn finish(self) -> Result<Vec<Node>> {
        match self.error {
            Some(message) => Err(YamlPathError::ParseFailure { message }),
            None => Ok(self.documents),
        }
    }

    /// Converts a scanner marker (1-based line, 0-based column) to node coordinates.
    fn position(marker: &Marker) -> (usize, usize) {
        (marker.line(), marker.col() + 1)
    }

    fn char_at(&self, marker: &Marker) -> Option<char> {
        let line = self.lines.get(marker.line().checked_sub(1)?)?;
        line.chars().nth(marker.col())
    }

    /// Position just past the last significant character before `marker`,
    /// looking back across lines and skipping comments.
    ///
    /// For an omitted value this is the `:` or `-` indicator that introduced it.
    fn after_preceding_indicator(&self, marker: &Marker) -> Option<(usize, usize)> {
        let mut index = marker.line().checked_sub(1)?;
        let mut limit = Some(marker.col());
        if index >= self.lines.len() {
            index = self.lines.len().checked_sub(1)?;
            limit = None;
        }

        loop {
            let line = self.lines.get(index)?;
            let text: Vec<char> = match limit {
                Some(col) => line.chars().take(col).collect(),
                None => line.chars().collect(),
            };
            let end = significant_end(&text);
            if end > 0 {
                return Some((index + 1, end + 1));
            }
            index = index.checked_sub(1)?;
            limit = None;
        }
    }

    /// Reads the anchor name following the `*` at `marker`.
    fn alias_name(&self, marker: &Marker) -> String {
        let Some(line) = marker
            .line()
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
        else {
            return String::new();
        };

        line.chars()
            .skip(marker.col())
            .skip_while(|c| *c == '*')
            .take_while(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']' | '{' | '}'))
            .collect()
    }

    fn push_complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Frame::Mapping { children, .. }) | Some(Frame::Sequence { children, .. }) => {
                children.push(node);
            }
            None => {
                if self.root.replace(node).is_some() {
                    self.fail("more than one root node in a document");
                }
            }
        }
    }

    fn fail(&mut self, message: &str) {
        if self.error.is_none() {
            self.error = Some(message.to_string());
        }
    }

    fn on_scalar(&mut self, value: String, style: TScalarStyle, marker: &Marker) {
        let (line, column) = Self::position(marker);

        // An omitted value (`key:` or a bare `-`) is positioned at the next
        // token; anchor it right after its indicator instead.
        let implicit_empty = matches!(style, TScalarStyle::Plain)
            && (value.is_empty() || (value == "~" && self.char_at(marker) != Some('~')));
        let node = if implicit_empty {
            let (line, column) = self
                .after_preceding_indicator(marker)
                .unwrap_or((line, column));
            Node::scalar(line, column, "")
        } else {
            Node::scalar(line, column, value)
        };

        self.push_complete(node);
    }

    /// Block mappings report their start after the first key, so a container
    /// starts at whichever comes first: its start marker or its first child.
    fn container_start(line: usize, column: usize, children: &[Node]) -> (usize, usize) {
        children
            .first()
            .map(|child| (child.line(), child.column()))
            .map_or((line, column), |first| first.min((line, column)))
    }

    fn on_container_end(&mut self) {
        let node = match self.stack.pop() {
            Some(Frame::Mapping {
                line,
                column,
                children,
            }) => {
                let (line, column) = Self::container_start(line, column, &children);
                Node::mapping(line, column, children)
            }
            Some(Frame::Sequence {
                line,
                column,
                children,
            }) => {
                let (line, column) = Self::container_start(line, column, &children);
                Node::sequence(line, column, children)
            }
            None => {
                self.fail("container end without matching start");
                return;
            }
        };
        self.push_complete(node);
    }
}

/// Length of `text` up to its last non-blank character, ignoring a trailing comment.
fn significant_end(text: &[char]) -> usize {
    let code_end = text
        .iter()
        .enumerate()
        .position(|(i, c)| *c == '#' && (i == 0 || text[i - 1].is_whitespace()))
        .unwrap_or(text.len());
    text[..code_end]
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |last| last + 1)
}

impl MarkedEventReceiver for TreeBuilder<'_> {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Nothing => {}
            Event::StreamStart => {}
            Event::StreamEnd => {}

            Event::DocumentStart => {
                self.root = None;
            }

            Event::DocumentEnd => {
                if !self.stack.is_empty() {
                    self.fail("document ended inside an open container");
                    self.stack.clear();
                }
                if let Some(root) = self.root.take() {
                    let (line, column) = (root.line(), root.column());
                    self.documents.push(Node::document(line, column, root));
                }
            }

            Event::Scalar(value, style, _anchor_id, _tag) => {
                self.on_scalar(value, style, &marker);
            }

            Event::Alias(_anchor_id) => {
                let (line, column) = Self::position(&marker);
                let name = self.alias_name(&marker);
                self.push_complete(Node::alias(line, column, name));
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                let (line, column) = Self::position(&marker);
                self.stack.push(Frame::Sequence {
                    line,
                    column,
                    children: Vec::new(),
                });
            }

            Event::MappingStart(_anchor_id, _tag) => {
                let (line, column) = Self::position(&marker);
                self.stack.push(Frame::Mapping {
                    line,
                    column,
                    children: Vec::new(),
                });
            }

            Event::SequenceEnd | Event::MappingEnd => self.on_container_end(),
        }
    }
}
