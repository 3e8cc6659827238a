//! Locating the token under a cursor and the chain of nodes above it.
//!
//! The search is a depth-first walk in document order. Containers are never
//! matched themselves; they only contribute context to the path. Within a
//! mapping a matching key wins over anything inside its value, and the first
//! matching pair in source order wins over later ones.

use super::error::{Result, YamlPathError};
use super::matcher::NodeMatcher;
use super::path::ResolvedPath;
use crate::document::node::{Node, NodeKind};

/// Resolves `matcher` against each document in turn and returns the path of
/// the first match.
///
/// # Errors
///
/// Returns [`YamlPathError::TokenNotFound`] when no document contains a
/// matching token.
///
/// # Example
///
/// ```
/// use yaml_path::document::parser::parse_documents;
/// use yaml_path::yamlpath::matcher::Locator;
/// use yaml_path::yamlpath::resolver::resolve_documents;
///
/// let docs = parse_documents("a: 1\n---\nb: 2\n").unwrap();
/// let path = resolve_documents(&Locator::Line(3), &docs).unwrap();
/// assert_eq!(path.leaf().unwrap().value(), "b");
/// ```
pub fn resolve_documents<'a, M>(matcher: &M, documents: &'a [Node]) -> Result<ResolvedPath<'a>>
where
    M: NodeMatcher + ?Sized,
{
    documents
        .iter()
        .find_map(|document| find_matched_token(matcher, document))
        .map(|reversed| {
            let path = ResolvedPath::from_reversed(reversed);
            tracing::debug!(locator = %matcher, %path, "resolved token");
            path
        })
        .ok_or_else(|| {
            tracing::debug!(locator = %matcher, documents = documents.len(), "no token matched");
            YamlPathError::TokenNotFound {
                locator: matcher.describe(),
            }
        })
}

/// Resolves `matcher` against a single tree rooted at `root`.
///
/// # Errors
///
/// Returns [`YamlPathError::TokenNotFound`] when nothing under `root` matches.
pub fn resolve<'a, M>(matcher: &M, root: &'a Node) -> Result<ResolvedPath<'a>>
where
    M: NodeMatcher + ?Sized,
{
    resolve_documents(matcher, std::slice::from_ref(root))
}

/// Returns the leaf-first chain from the matched token up to `node`.
fn find_matched_token<'a, M>(matcher: &M, node: &'a Node) -> Option<Vec<&'a Node>>
where
    M: NodeMatcher + ?Sized,
{
    match node.kind() {
        NodeKind::Document | NodeKind::Sequence => {
            let mut reversed = node
                .children()
                .iter()
                .find_map(|child| find_matched_token(matcher, child))?;
            reversed.push(node);
            Some(reversed)
        }

        NodeKind::Mapping => {
            for (key, value) in node.pairs() {
                if matcher.matches(key) {
                    return Some(vec![key, node]);
                }

                let Some(mut reversed) = find_matched_token(matcher, value) else {
                    continue;
                };
                if reversed.is_empty() {
                    return Some(vec![key]);
                }
                reversed.push(key);
                reversed.push(node);
                return Some(reversed);
            }
            None
        }

        NodeKind::Scalar | NodeKind::Alias => matcher.matches(node).then(|| vec![node]),
    }
}
