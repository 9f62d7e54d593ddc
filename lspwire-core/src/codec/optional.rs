//! Optional codec
//!
//! Wraps any codec for `T` into a codec for `Option<T>`: `None` encodes to
//! `null` and `null` decodes to `None`. Errors from the inner codec pass
//! through with the path untouched, since the optional layer adds no level to
//! the tree.
//!
//! The inner codec must never encode to `null` itself, otherwise "absent" and
//! "present with a null payload" collapse into the same wire value and the
//! latter decodes as `None`. [`ValueCodec`](super::ValueCodec) is the one such
//! codec in this crate; record declarations log a debug event when they wrap
//! it.

use super::Codec;
use crate::error::DecodeError;
use crate::value::{Shape, Value};

/// `Option<T>` ↔ `null` or the inner encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalCodec<C> {
    inner: C,
}

impl<C> OptionalCodec<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped codec
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C: Codec<T>> Codec<Option<T>> for OptionalCodec<C> {
    fn encode(&self, value: &Option<T>) -> Value {
        match value {
            Some(inner) => self.inner.encode(inner),
            None => Value::Null,
        }
    }

    fn decode(&self, value: &Value) -> Result<Option<T>, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => self.inner.decode(other).map(Some),
        }
    }

    fn shape(&self) -> Shape {
        self.inner.shape().union(Shape::NULL)
    }
}
