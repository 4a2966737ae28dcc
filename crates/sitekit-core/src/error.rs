//! Error types for Sitekit core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Sitekit core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Layout configuration is not valid JSON or has the wrong shape.
    #[error("Invalid layout configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured root path is not an absolute route path.
    #[error("Invalid root path '{0}': must start with '/'")]
    InvalidRootPath(String),

    /// A class field that must carry at least one token is blank.
    #[error("Class field '{field}' must not be empty")]
    EmptyClass {
        /// Name of the offending configuration field.
        field: &'static str,
    },

    /// A field used as a CSS selector is not a single class token.
    #[error("Class field '{field}' must be a single class token, got '{value}'")]
    InvalidClassToken {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}
