//! Error types for lspwire
//!
//! Two layers of errors live here:
//!
//! - **DecodeError**: produced by codecs when a [`Value`](crate::Value) tree
//!   does not match the declared shape. Carries the path from the decode root
//!   to the offending value and a [`DecodeErrorKind`].
//! - **Error**: crate-level error for the text boundary, wrapping decode errors
//!   together with malformed JSON and unrepresentable values.
//!
//! # Paths
//!
//! Paths are built bottom-up: the codec that detects a problem reports it with
//! an empty path, and every composite codec (record, array, map, tagged variant)
//! prepends its own segment while the error travels back to the caller. The
//! optional codec and the untagged variant codec are transparent and add
//! nothing.
//!
//! ```rust
//! use lspwire_core::{DecodeError, DecodeErrorKind};
//!
//! let err = DecodeError::new(DecodeErrorKind::MissingField("line".into()))
//!     .at_key("start")
//!     .at_index(2)
//!     .at_key("edits");
//! assert_eq!(err.path().to_string(), "$.edits[2].start");
//! ```
//!
//! Decoding is all-or-nothing: no error carries a partially decoded value.

use crate::value::{Shape, ValueKind};
use std::fmt;
use thiserror::Error;

/// Result type for lspwire operations at the text boundary
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error type
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The value tree did not match the declared shape
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The input text is not valid JSON
    ///
    /// Produced before any codec runs.
    #[error("JSON error: {0}")]
    Json(String),

    /// A value cannot be written as JSON text
    ///
    /// Raised for non-finite floats, which JSON has no spelling for.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// One step on the way from the decode root to a nested value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member
    Key(String),
    /// Array element
    Index(usize),
}

/// Location of a value inside the decoded tree
///
/// Segments are stored innermost-first because errors grow outward as they
/// propagate; iteration and display are root-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    reversed: Vec<PathSegment>,
}

impl Path {
    /// The decode root
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.reversed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Segments from the root down
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.reversed.iter().rev()
    }

    fn push_outer(&mut self, segment: PathSegment) {
        self.reversed.push(segment);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// What went wrong while decoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    /// The value has a kind the codec cannot accept
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Kinds the codec accepts
        expected: Shape,
        /// Kind that was present
        found: ValueKind,
    },

    /// A number is the right kind but does not fit the target type
    #[error("{value} is out of range for {target}")]
    OutOfRange {
        /// Rendered input value
        value: String,
        /// Name of the target type
        target: &'static str,
    },

    /// The value has the right kind but is not one of the declared constants
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A required record field is absent
    #[error("missing field `{0}`")]
    MissingField(String),

    /// The discriminator field of a tagged variant is absent or not a string
    #[error("missing or invalid tag field `{field}`")]
    MissingOrInvalidTag {
        /// Name of the discriminator field
        field: String,
    },

    /// The discriminator names no declared alternative
    #[error("unknown tag `{0}`")]
    UnknownTag(String),

    /// Every alternative of an untagged variant rejected the value
    #[error("no alternative of {variant} matched{}", format_attempts(.attempts))]
    NoAlternativeMatched {
        /// Name of the variant type
        variant: String,
        /// Failure of each alternative, in declared order
        attempts: Vec<AlternativeFailure>,
    },
}

/// Why one alternative of an untagged variant was rejected
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeFailure {
    /// Declared name of the alternative
    pub alternative: String,
    /// Error from that alternative's decoder
    pub error: DecodeError,
}

fn format_attempts(attempts: &[AlternativeFailure]) -> String {
    let mut out = String::new();
    for attempt in attempts {
        out.push_str(&format!("; {}: {}", attempt.alternative, attempt.error));
    }
    out
}

/// Decode failure with the path to the offending value
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    path: Path,
    kind: Box<DecodeErrorKind>,
}

impl DecodeError {
    /// Create an error located at the current value
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            path: Path::root(),
            kind: Box::new(kind),
        }
    }

    /// Shorthand for [`DecodeErrorKind::TypeMismatch`]
    pub fn type_mismatch(expected: Shape, found: ValueKind) -> Self {
        Self::new(DecodeErrorKind::TypeMismatch { expected, found })
    }

    /// Shorthand for [`DecodeErrorKind::MissingField`]
    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::MissingField(key.into()))
    }

    /// Shorthand for [`DecodeErrorKind::InvalidValue`]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidValue(message.into()))
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record that the error happened inside object member `key`
    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.push_outer(PathSegment::Key(key.into()));
        self
    }

    /// Record that the error happened inside array element `index`
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push_outer(PathSegment::Index(index));
        self
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: {}", self.path, self.kind)
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeErrorKind> for DecodeError {
    fn from(kind: DecodeErrorKind) -> Self {
        DecodeError::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display_root_first() {
        let err = DecodeError::missing_field("uri")
            .at_key("textDocument")
            .at_index(0)
            .at_key("documentChanges");

        assert_eq!(err.path().to_string(), "$.documentChanges[0].textDocument");
        assert_eq!(err.path().len(), 3);
        assert_eq!(
            err.path().segments().next(),
            Some(&PathSegment::Key("documentChanges".into()))
        );
    }

    #[test]
    fn test_root_path() {
        let err = DecodeError::type_mismatch(Shape::OBJECT, ValueKind::Array);
        assert!(err.path().is_root());
        assert_eq!(err.to_string(), "at $: expected object, found array");
    }

    #[test]
    fn test_missing_field_display() {
        let err = DecodeError::missing_field("name").at_key("params");
        assert_eq!(err.to_string(), "at $.params: missing field `name`");
    }

    #[test]
    fn test_no_alternative_lists_attempts() {
        let err = DecodeError::new(DecodeErrorKind::NoAlternativeMatched {
            variant: "RequestId".into(),
            attempts: vec![
                AlternativeFailure {
                    alternative: "integer".into(),
                    error: DecodeError::type_mismatch(Shape::INTEGER, ValueKind::Bool),
                },
                AlternativeFailure {
                    alternative: "string".into(),
                    error: DecodeError::type_mismatch(Shape::STRING, ValueKind::Bool),
                },
            ],
        });

        let text = err.to_string();
        assert!(text.starts_with("at $: no alternative of RequestId matched"));
        assert!(text.contains("integer: at $: expected integer, found boolean"));
        assert!(text.contains("string: at $: expected string, found boolean"));
    }

    #[test]
    fn test_error_from_decode_error() {
        let err: Error = DecodeError::missing_field("id").into();
        match err {
            Error::Decode(inner) => {
                assert_eq!(inner.kind(), &DecodeErrorKind::MissingField("id".into()))
            }
            _ => panic!("Expected Decode error"),
        }
    }

    #[test]
    fn test_json_error_display() {
        let err = Error::Json("expected value at line 1 column 1".into());
        assert!(err.to_string().starts_with("JSON error"));
    }
}
