//! Parsed YAML documents.
//!
//! - `node`: the position-carrying tree node type
//! - `parser`: YAML text to one tree per document

pub mod node;
pub mod parser;
