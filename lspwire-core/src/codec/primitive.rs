//! Leaf codecs
//!
//! These define the base case of every composite codec. They never extend the
//! error path; the composite that called them does.

use super::Codec;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::value::{Shape, Value};
use std::marker::PhantomData;

/// `bool` ↔ JSON boolean
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCodec;

impl Codec<bool> for BoolCodec {
    fn encode(&self, value: &bool) -> Value {
        Value::Bool(*value)
    }

    fn decode(&self, value: &Value) -> Result<bool, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::type_mismatch(Shape::BOOL, value.kind()))
    }

    fn shape(&self) -> Shape {
        Shape::BOOL
    }
}

/// `String` ↔ JSON string
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec<String> for StringCodec {
    fn encode(&self, value: &String) -> Value {
        Value::String(value.clone())
    }

    fn decode(&self, value: &Value) -> Result<String, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::type_mismatch(Shape::STRING, value.kind()))
    }

    fn shape(&self) -> Shape {
        Shape::STRING
    }
}

/// `f64` ↔ JSON number
///
/// Integers on the wire are accepted and widened, since JSON text does not
/// distinguish `1` from `1.0` for a decimal field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCodec;

impl Codec<f64> for FloatCodec {
    fn encode(&self, value: &f64) -> Value {
        Value::Float(*value)
    }

    fn decode(&self, value: &Value) -> Result<f64, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| DecodeError::type_mismatch(Shape::NUMBER, value.kind()))
    }

    fn shape(&self) -> Shape {
        Shape::NUMBER
    }
}

/// Integer types with a wire representation
pub trait WireInteger:
    Copy + TryFrom<i64> + TryFrom<u64> + Into<Value> + Send + Sync + 'static
{
    /// Type name used in range errors
    const NAME: &'static str;
}

macro_rules! wire_integer {
    ($($t:ty),*) => {
        $(impl WireInteger for $t {
            const NAME: &'static str = stringify!($t);
        })*
    };
}

wire_integer!(i32, i64, u32, u64);

/// Integer ↔ JSON integer, range-checked on decode
///
/// Floats are rejected even when integral: `1.0` is not a valid `uinteger`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntCodec<N>(PhantomData<fn() -> N>);

impl<N> IntCodec<N> {
    pub const fn new() -> Self {
        IntCodec(PhantomData)
    }
}

impl<N: WireInteger> Codec<N> for IntCodec<N> {
    fn encode(&self, value: &N) -> Value {
        (*value).into()
    }

    fn decode(&self, value: &Value) -> Result<N, DecodeError> {
        let converted = match value {
            Value::Int(n) => N::try_from(*n).ok(),
            Value::UInt(n) => N::try_from(*n).ok(),
            other => return Err(DecodeError::type_mismatch(Shape::INTEGER, other.kind())),
        };
        converted.ok_or_else(|| {
            DecodeError::new(DecodeErrorKind::OutOfRange {
                value: value.to_string(),
                target: N::NAME,
            })
        })
    }

    fn shape(&self) -> Shape {
        Shape::INTEGER
    }
}

/// Identity codec for untyped payloads (the protocol's `LSPAny`)
///
/// Accepts every value including `null`, so wrapping it in an optional codec
/// makes a present `null` indistinguishable from absence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCodec;

impl Codec<Value> for ValueCodec {
    fn encode(&self, value: &Value) -> Value {
        value.clone()
    }

    fn decode(&self, value: &Value) -> Result<Value, DecodeError> {
        Ok(value.clone())
    }
}

/// `()` ↔ JSON `null`, for payload-less alternatives and results
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCodec;

impl Codec<()> for UnitCodec {
    fn encode(&self, _value: &()) -> Value {
        Value::Null
    }

    fn decode(&self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Null => Ok(()),
            other => Err(DecodeError::type_mismatch(Shape::NULL, other.kind())),
        }
    }

    fn shape(&self) -> Shape {
        Shape::NULL
    }
}
