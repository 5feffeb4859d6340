//! Response parsing error types.

use thiserror::Error;

/// Result type for response parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing a backend response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The extracted payload is not syntactically valid JSON. Carries the
    /// original decode diagnostic.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// The payload decoded, but the top level is not an object.
    #[error("Unexpected shape: expected a JSON object at the top level, got {actual}")]
    UnexpectedShape { actual: &'static str },

    /// A required field is missing, mistyped, or outside its enum.
    #[error("Schema violation at {path}: expected {expected}, got {actual}")]
    SchemaViolation {
        path: String,
        expected: String,
        actual: String,
    },
}

impl ParseError {
    /// Create a schema violation for the given field path.
    pub fn violation(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The field path of a schema violation, if this is one.
    pub fn field_path(&self) -> Option<&str> {
        if let Self::SchemaViolation { path, .. } = self {
            Some(path)
        } else {
            None
        }
    }
}
