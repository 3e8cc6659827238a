//! Error types for parsing, path resolution, and path formatting.

use thiserror::Error;

/// Errors that can occur while turning a cursor position into a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YamlPathError {
    /// The YAML source could not be parsed.
    #[error("cannot parse yaml: {message}")]
    ParseFailure { message: String },

    /// No node in any document matched the locator.
    #[error("token not found by {locator}")]
    TokenNotFound { locator: String },

    /// A formatter met a path that breaks the root-to-leaf shape.
    #[error("invalid path: {reason}")]
    InvalidPathShape { reason: String },

    /// The requested output format identifier is unknown.
    #[error("unsupported path format: {0}")]
    UnsupportedFormat(String),
}

impl YamlPathError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        YamlPathError::InvalidPathShape {
            reason: reason.into(),
        }
    }
}

impl From<yaml_rust2::scanner::ScanError> for YamlPathError {
    fn from(err: yaml_rust2::scanner::ScanError) -> Self {
        YamlPathError::ParseFailure {
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the path engine.
pub type Result<T> = std::result::Result<T, YamlPathError>;
