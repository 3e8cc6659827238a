//! yaml-path - resolve a cursor position in a YAML document to its structural path.
//!
//! The library is split into:
//!
//! - [`document`]: parsing YAML text into position-carrying node trees
//! - [`yamlpath`]: locating the token under a cursor and rendering its path
//! - [`config`]: persisted defaults for the command-line tool
//! - [`file`]: reading YAML sources from files or stdin
//!
//! # Example
//!
//! ```
//! use yaml_path::path_at_point;
//! use yaml_path::yamlpath::{Locator, SlashFormatter};
//!
//! let source = "top:\n  first:\n    - name: myname\n      attr2: val2\n";
//! let path = path_at_point(source, &Locator::new(4, 14), &SlashFormatter::default()).unwrap();
//! assert_eq!(path, "/top/first/name=myname/attr2");
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod yamlpath;

use document::parser::parse_documents;
use yamlpath::error::Result;
use yamlpath::{resolve_documents, NodeMatcher, PathFormatter};

/// Parses `source`, resolves `matcher` against its documents, and formats
/// the first match with `formatter`.
///
/// # Errors
///
/// - [`yamlpath::YamlPathError::ParseFailure`] if `source` is not valid YAML
/// - [`yamlpath::YamlPathError::TokenNotFound`] if nothing matches
/// - [`yamlpath::YamlPathError::InvalidPathShape`] if formatting fails
pub fn path_at_point<M, F>(source: &str, matcher: &M, formatter: &F) -> Result<String>
where
    M: NodeMatcher + ?Sized,
    F: PathFormatter + ?Sized,
{
    let documents = parse_documents(source)?;
    let path = resolve_documents(matcher, &documents)?;
    formatter.format(&path)
}
