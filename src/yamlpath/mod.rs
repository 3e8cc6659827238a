//! Cursor-to-path resolution for YAML documents.
//!
//! Given a parsed document and a cursor position, this module finds the token
//! under the cursor and renders the chain of keys and indices that leads to it.
//!
//! # Pipeline
//!
//! 1. A [`Locator`] describes the cursor: a line, or a line and column.
//! 2. [`resolve_documents`] walks the tree and returns a [`ResolvedPath`],
//!    the root-to-leaf chain of nodes.
//! 3. A [`PathFormatter`] renders that chain in one of two grammars:
//!
//! - `bosh`: `/top/first/name=myname/attr2`
//! - `jsonpath`: `$.top.first[0].attr2`
//!
//! # Examples
//!
//! ```
//! use yaml_path::document::parser::parse_documents;
//! use yaml_path::yamlpath::{resolve_documents, DottedFormatter, Locator, PathFormatter};
//!
//! let docs = parse_documents("top:\n  first:\n    - a\n    - b\n").unwrap();
//! let path = resolve_documents(&Locator::Line(4), &docs).unwrap();
//! assert_eq!(DottedFormatter.format(&path).unwrap(), "$.top.first[1]");
//! ```

pub mod error;
pub mod formatter;
pub mod matcher;
pub mod path;
pub mod resolver;

pub use error::YamlPathError;
pub use formatter::{DottedFormatter, PathFormat, PathFormatter, SlashFormatter, SlashOptions};
pub use matcher::{Locator, NodeMatcher};
pub use path::ResolvedPath;
pub use resolver::{resolve, resolve_documents};
