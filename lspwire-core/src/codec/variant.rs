//! Variant codecs
//!
//! A protocol field often admits one of several alternative shapes, e.g. a
//! request id that is an integer *or* a string, or a document change that is a
//! text edit *or* a file operation. In Rust these are enums whose variants each
//! wrap one alternative type. Two strategies map such enums to the wire:
//!
//! - [`UntaggedVariantCodec`]: the wire value looks exactly like one of the
//!   alternatives. Decoding tries each alternative in declared order and keeps
//!   the **first** that succeeds, even if a later one would also have matched.
//!   Declaration order is therefore part of the wire contract.
//! - [`TaggedVariantCodec`]: the wire value is an object naming the active
//!   alternative in a discriminator field and carrying its encoding in a payload
//!   field. Decoding dispatches by name, independent of declaration order.
//!
//! Both are built from the same [`Alternative`] declarations. Discriminator
//! names are always declared explicitly and never derived from Rust type names,
//! so refactoring a type cannot change the wire format.
//!
//! ```rust
//! use lspwire_core::{alternative, Codec, IntCodec, StringCodec, UntaggedVariantCodec, Value};
//!
//! #[derive(Debug, PartialEq)]
//! enum Id {
//!     Number(i32),
//!     Text(String),
//! }
//!
//! let codec = UntaggedVariantCodec::new(
//!     "Id",
//!     vec![
//!         alternative!("integer", Id::Number, IntCodec::<i32>::new()),
//!         alternative!("string", Id::Text, StringCodec),
//!     ],
//! );
//!
//! assert_eq!(codec.encode(&Id::Number(42)), Value::Int(42));
//! assert_eq!(codec.decode(&Value::from("abc")).unwrap(), Id::Text("abc".into()));
//! assert!(codec.decode(&Value::Bool(true)).is_err());
//! ```

use super::Codec;
use crate::error::{AlternativeFailure, DecodeError, DecodeErrorKind};
use crate::value::{Map, Shape, Value};
use std::collections::HashMap;
use std::sync::Arc;

type EncodeFn<E> = Box<dyn Fn(&E) -> Option<Value> + Send + Sync>;
type DecodeFn<E> = Box<dyn Fn(&Value) -> Result<E, DecodeError> + Send + Sync>;

/// One declared alternative of an enum `E`
///
/// Pairs the codec of the wrapped type with the enum variant that holds it:
/// `inject` wraps a decoded value into `E`, `project` extracts it back out when
/// `E` currently holds this alternative. The [`alternative!`](crate::alternative)
/// macro writes both for a single-field tuple variant.
pub struct Alternative<E> {
    name: String,
    shape: Shape,
    encode: EncodeFn<E>,
    decode: DecodeFn<E>,
}

impl<E: 'static> Alternative<E> {
    pub fn new<T, C, I, P>(name: impl Into<String>, codec: C, inject: I, project: P) -> Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        I: Fn(T) -> E + Send + Sync + 'static,
        P: for<'a> Fn(&'a E) -> Option<&'a T> + Send + Sync + 'static,
    {
        let codec = Arc::new(codec);
        let shape = Codec::<T>::shape(&*codec);
        let encoder = Arc::clone(&codec);

        Self {
            name: name.into(),
            shape,
            encode: Box::new(move |value: &E| {
                project(value).map(|inner| Codec::<T>::encode(&*encoder, inner))
            }),
            decode: Box::new(move |value: &Value| Codec::<T>::decode(&*codec, value).map(&inject)),
        }
    }
}

impl<E> Alternative<E> {
    /// Declared name: the discriminator for tagged variants, a label in
    /// diagnostics for untagged ones
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shape accepted by the wrapped codec
    pub fn shape(&self) -> Shape {
        self.shape
    }

    fn try_encode(&self, value: &E) -> Option<Value> {
        (self.encode)(value)
    }

    fn decode(&self, value: &Value) -> Result<E, DecodeError> {
        (self.decode)(value)
    }
}

impl<E> std::fmt::Debug for Alternative<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alternative")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Declare an [`Alternative`] for a single-field tuple variant
///
/// ```rust,ignore
/// alternative!("TextEdit", DocumentChange::Edit, TextEdit::codec())
/// ```
///
/// expands to an alternative named `"TextEdit"` that injects with
/// `DocumentChange::Edit` and projects with a `match` on the same variant.
#[macro_export]
macro_rules! alternative {
    ($name:expr, $enum:ident :: $variant:ident, $codec:expr) => {
        $crate::Alternative::new(
            $name,
            $codec,
            $enum::$variant,
            |value: &$enum| match value {
                $enum::$variant(inner) => ::std::option::Option::Some(inner),
                #[allow(unreachable_patterns)]
                _ => ::std::option::Option::None,
            },
        )
    };
}

fn encode_with<E>(variant: &str, alternatives: &[Alternative<E>], value: &E) -> (usize, Value) {
    alternatives
        .iter()
        .enumerate()
        .find_map(|(index, alternative)| alternative.try_encode(value).map(|v| (index, v)))
        .unwrap_or_else(|| {
            panic!("{variant}: value is not held by any declared alternative")
        })
}

/// Untagged variant: trial decoding in declared order
///
/// # Encoding
///
/// Delegates to the alternative currently holding the value. No wrapper and no
/// discriminator is written.
///
/// # Decoding
///
/// Tries each alternative in declared order and returns the first success.
/// Alternatives whose [`Shape`] excludes the input's kind are skipped without
/// running their decoder; the result is the same, because such a decoder would
/// have failed. When every alternative fails the error is
/// [`DecodeErrorKind::NoAlternativeMatched`] listing each failure.
///
/// # Ambiguity
///
/// When a value satisfies several alternatives, the earliest declared one
/// wins, on every call. Declare the most specific shapes first (a record with
/// more required fields before one with fewer).
///
/// # Panics
///
/// `encode` panics if no alternative's projection claims the value, which
/// means the declaration omits one of the enum's variants.
pub struct UntaggedVariantCodec<E> {
    name: String,
    alternatives: Vec<Alternative<E>>,
}

impl<E> UntaggedVariantCodec<E> {
    pub fn new(name: impl Into<String>, alternatives: Vec<Alternative<E>>) -> Self {
        Self {
            name: name.into(),
            alternatives,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternatives in declared (trial) order
    pub fn alternatives(&self) -> &[Alternative<E>] {
        &self.alternatives
    }
}

impl<E> Codec<E> for UntaggedVariantCodec<E> {
    fn encode(&self, value: &E) -> Value {
        encode_with(&self.name, &self.alternatives, value).1
    }

    fn decode(&self, value: &Value) -> Result<E, DecodeError> {
        let kind = value.kind();
        let mut attempts = Vec::with_capacity(self.alternatives.len());

        for alternative in &self.alternatives {
            if !alternative.shape.contains(kind) {
                attempts.push(AlternativeFailure {
                    alternative: alternative.name.clone(),
                    error: DecodeError::type_mismatch(alternative.shape, kind),
                });
                continue;
            }

            match alternative.decode(value) {
                Ok(decoded) => {
                    tracing::trace!(
                        variant = %self.name,
                        alternative = %alternative.name,
                        rejected = attempts.len(),
                        "Untagged alternative matched"
                    );
                    return Ok(decoded);
                }
                Err(error) => {
                    tracing::trace!(
                        variant = %self.name,
                        alternative = %alternative.name,
                        error = %error,
                        "Untagged alternative rejected"
                    );
                    attempts.push(AlternativeFailure {
                        alternative: alternative.name.clone(),
                        error,
                    });
                }
            }
        }

        tracing::debug!(
            variant = %self.name,
            found = %kind,
            attempts = attempts.len(),
            "No untagged alternative matched"
        );
        Err(DecodeError::new(DecodeErrorKind::NoAlternativeMatched {
            variant: self.name.clone(),
            attempts,
        }))
    }

    fn shape(&self) -> Shape {
        self.alternatives
            .iter()
            .fold(Shape::NONE, |acc, alternative| acc.union(alternative.shape))
    }
}

impl<E> std::fmt::Debug for UntaggedVariantCodec<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UntaggedVariantCodec")
            .field("name", &self.name)
            .field("alternatives", &self.alternatives)
            .finish()
    }
}

/// Default discriminator field
pub const DEFAULT_TAG_FIELD: &str = "type";

/// Default payload field
pub const DEFAULT_PAYLOAD_FIELD: &str = "data";

/// Tagged variant: discriminator object with O(1) dispatch
///
/// Encodes as `{"<tag>": "<alternative name>", "<payload>": <encoding>}`.
/// Field names default to `"type"` and `"data"` and can be changed with
/// [`with_tag_field`](Self::with_tag_field) and
/// [`with_payload_field`](Self::with_payload_field).
///
/// # Decoding
///
/// - not an object → `TypeMismatch`
/// - tag field absent or not a string → `MissingOrInvalidTag`
/// - tag names no alternative → `UnknownTag`
/// - payload field absent → the alternative decodes `null`; if it cannot,
///   `MissingField(payload)`
/// - payload errors are reported under the payload key
///
/// # Panics
///
/// Like the untagged codec, `encode` panics on a value no alternative claims.
pub struct TaggedVariantCodec<E> {
    name: String,
    tag_field: String,
    payload_field: String,
    alternatives: Vec<Alternative<E>>,
    by_tag: HashMap<String, usize>,
}

impl<E> TaggedVariantCodec<E> {
    /// Build the codec and its discriminator table
    ///
    /// # Panics
    ///
    /// Panics if two alternatives share a discriminator, since values of the
    /// second could be encoded but never decoded.
    pub fn new(name: impl Into<String>, alternatives: Vec<Alternative<E>>) -> Self {
        let name = name.into();
        let mut by_tag = HashMap::with_capacity(alternatives.len());

        for (index, alternative) in alternatives.iter().enumerate() {
            if by_tag.insert(alternative.name.clone(), index).is_some() {
                tracing::error!(variant = %name, tag = %alternative.name, "Duplicate discriminator");
                panic!("{name} declares discriminator `{}` twice", alternative.name);
            }
        }

        Self {
            name,
            tag_field: DEFAULT_TAG_FIELD.to_string(),
            payload_field: DEFAULT_PAYLOAD_FIELD.to_string(),
            alternatives,
            by_tag,
        }
    }

    /// Set the discriminator field name
    pub fn with_tag_field(mut self, field: impl Into<String>) -> Self {
        self.tag_field = field.into();
        self
    }

    /// Set the payload field name
    pub fn with_payload_field(mut self, field: impl Into<String>) -> Self {
        self.payload_field = field.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag_field(&self) -> &str {
        &self.tag_field
    }

    pub fn payload_field(&self) -> &str {
        &self.payload_field
    }

    /// Declared discriminators, in declaration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(|alternative| alternative.name())
    }
}

impl<E> Codec<E> for TaggedVariantCodec<E> {
    fn encode(&self, value: &E) -> Value {
        let (index, payload) = encode_with(&self.name, &self.alternatives, value);
        let mut map = Map::with_capacity(2);
        map.insert(
            self.tag_field.clone(),
            Value::String(self.alternatives[index].name.clone()),
        );
        map.insert(self.payload_field.clone(), payload);
        Value::Object(map)
    }

    fn decode(&self, value: &Value) -> Result<E, DecodeError> {
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::type_mismatch(Shape::OBJECT, value.kind()))?;

        let tag = match map.get(&self.tag_field) {
            Some(Value::String(tag)) => tag,
            _ => {
                return Err(DecodeError::new(DecodeErrorKind::MissingOrInvalidTag {
                    field: self.tag_field.clone(),
                }))
            }
        };

        let alternative = match self.by_tag.get(tag.as_str()) {
            Some(&index) => &self.alternatives[index],
            None => {
                tracing::debug!(variant = %self.name, tag = %tag, "Unknown discriminator");
                return Err(DecodeError::new(DecodeErrorKind::UnknownTag(tag.clone())));
            }
        };

        match map.get(&self.payload_field) {
            Some(payload) => alternative
                .decode(payload)
                .map_err(|e| e.at_key(self.payload_field.as_str())),
            None => alternative
                .decode(&Value::Null)
                .map_err(|_| DecodeError::missing_field(self.payload_field.as_str())),
        }
    }

    fn shape(&self) -> Shape {
        Shape::OBJECT
    }
}

impl<E> std::fmt::Debug for TaggedVariantCodec<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedVariantCodec")
            .field("name", &self.name)
            .field("tag_field", &self.tag_field)
            .field("payload_field", &self.payload_field)
            .field("alternatives", &self.alternatives)
            .finish()
    }
}
