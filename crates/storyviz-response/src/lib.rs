//! Structured-response parsing for StoryViz.
//!
//! Generative backends return free-form text: sometimes bare JSON, sometimes
//! JSON wrapped in prose and markdown code fences, sometimes garbage. This
//! crate turns that untrusted text into a fully validated
//! [`storyviz_models::Project`] or a classified error:
//!
//! - [`ParseError::MalformedJson`] - the payload is not valid JSON
//! - [`ParseError::UnexpectedShape`] - valid JSON, but not an object
//! - [`ParseError::SchemaViolation`] - a required field is missing, mistyped
//!   or outside its enum, reported with its full field path
//!
//! Validation is all-or-nothing: no partial project is ever surfaced, and no
//! retry happens here. Re-prompting the backend is the caller's business.

pub mod error;
pub mod extract;
pub mod validate;

pub use error::{ParseError, ParseResult};
pub use extract::extract_payload;
pub use validate::parse_project;
