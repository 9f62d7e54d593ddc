//! Codec engine
//!
//! A [`Codec<T>`] is a stateless pair of functions converting a `T` into a
//! [`Value`] tree and back. Composite codecs are built from simpler ones:
//!
//! - **Primitive**: [`BoolCodec`], [`IntCodec`], [`FloatCodec`], [`StringCodec`],
//!   [`ValueCodec`], [`UnitCodec`] and [`EnumCodec`] for declared constants
//! - **Optional**: [`OptionalCodec`] maps `None` to `null`
//! - **Collections**: [`ArrayCodec`] and [`MapCodec`]
//! - **Variants**: [`UntaggedVariantCodec`] (trial decoding, first declared
//!   alternative wins) and [`TaggedVariantCodec`] (discriminator object)
//! - **Records**: [`RecordCodec`] maps a declared list of fields to an object
//!
//! # Sharing
//!
//! Codecs hold no mutable state. They are `Send + Sync`, may be stored in
//! statics and used from any number of threads at once. References, boxes and
//! `Arc`s of codecs are codecs themselves, so a large record codec can be built
//! once and borrowed everywhere it is nested.
//!
//! # Canonical codecs
//!
//! The [`Wire`] trait attaches a canonical codec to a type. It is implemented
//! for the primitives and standard containers here, and for records and
//! variants by the `lspwire-macros` derives.
//!
//! ```rust
//! use lspwire_core::{from_value, to_value, Value};
//!
//! let value = to_value(&Some(vec![1i32, 2, 3]));
//! assert_eq!(value.as_array().map(|items| items.len()), Some(3));
//!
//! let back: Option<Vec<i32>> = from_value(&value).unwrap();
//! assert_eq!(back, Some(vec![1, 2, 3]));
//!
//! let absent: Option<Vec<i32>> = from_value(&Value::Null).unwrap();
//! assert_eq!(absent, None);
//! ```

mod collection;
mod enumeration;
mod optional;
mod primitive;
mod record;
mod variant;

pub use collection::{ArrayCodec, MapCodec};
pub use enumeration::EnumCodec;
pub use optional::OptionalCodec;
pub use primitive::{BoolCodec, FloatCodec, IntCodec, StringCodec, UnitCodec, ValueCodec, WireInteger};
pub use record::{RecordBuilder, RecordCodec};
pub use variant::{
    Alternative, TaggedVariantCodec, UntaggedVariantCodec, DEFAULT_PAYLOAD_FIELD, DEFAULT_TAG_FIELD,
};

use crate::error::DecodeError;
use crate::value::{Shape, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Conversion between a Rust type and the [`Value`] model
///
/// Encoding is total: any well-formed `T` produces a value. Decoding checks the
/// value against the declared shape and reports the first mismatch.
pub trait Codec<T>: Send + Sync {
    /// Convert a typed value into a value tree
    fn encode(&self, value: &T) -> Value;

    /// Convert a value tree into a typed value
    fn decode(&self, value: &Value) -> Result<T, DecodeError>;

    /// Kinds of value this codec can possibly accept
    ///
    /// Used by the untagged variant codec to skip alternatives that cannot
    /// match without running their full decoder. The default accepts anything.
    fn shape(&self) -> Shape {
        Shape::ANY
    }
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for &C {
    fn encode(&self, value: &T) -> Value {
        Codec::<T>::encode(&**self, value)
    }

    fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        Codec::<T>::decode(&**self, value)
    }

    fn shape(&self) -> Shape {
        Codec::<T>::shape(&**self)
    }
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Box<C> {
    fn encode(&self, value: &T) -> Value {
        Codec::<T>::encode(&**self, value)
    }

    fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        Codec::<T>::decode(&**self, value)
    }

    fn shape(&self) -> Shape {
        Codec::<T>::shape(&**self)
    }
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Arc<C> {
    fn encode(&self, value: &T) -> Value {
        Codec::<T>::encode(&**self, value)
    }

    fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        Codec::<T>::decode(&**self, value)
    }

    fn shape(&self) -> Shape {
        Codec::<T>::shape(&**self)
    }
}

/// A type with a canonical codec
///
/// Records and variants return a `&'static` codec built on first use; the
/// primitive codecs are zero-sized and returned by value.
pub trait Wire: Sized {
    /// The canonical codec type
    type Codec: Codec<Self>;

    /// The canonical codec
    fn codec() -> Self::Codec;
}

/// Encode a value with its canonical codec
pub fn to_value<T: Wire>(value: &T) -> Value {
    Codec::<T>::encode(&T::codec(), value)
}

/// Decode a value with the canonical codec of `T`
pub fn from_value<T: Wire>(value: &Value) -> Result<T, DecodeError> {
    Codec::<T>::decode(&T::codec(), value)
}

impl Wire for bool {
    type Codec = BoolCodec;

    fn codec() -> Self::Codec {
        BoolCodec
    }
}

impl Wire for String {
    type Codec = StringCodec;

    fn codec() -> Self::Codec {
        StringCodec
    }
}

impl Wire for f64 {
    type Codec = FloatCodec;

    fn codec() -> Self::Codec {
        FloatCodec
    }
}

impl Wire for Value {
    type Codec = ValueCodec;

    fn codec() -> Self::Codec {
        ValueCodec
    }
}

impl Wire for () {
    type Codec = UnitCodec;

    fn codec() -> Self::Codec {
        UnitCodec
    }
}

macro_rules! wire_integer {
    ($($t:ty),*) => {
        $(impl Wire for $t {
            type Codec = IntCodec<$t>;

            fn codec() -> Self::Codec {
                IntCodec::new()
            }
        })*
    };
}

wire_integer!(i32, i64, u32, u64);

impl<T: Wire> Wire for Option<T> {
    type Codec = OptionalCodec<T::Codec>;

    fn codec() -> Self::Codec {
        OptionalCodec::new(T::codec())
    }
}

impl<T: Wire> Wire for Vec<T> {
    type Codec = ArrayCodec<T::Codec>;

    fn codec() -> Self::Codec {
        ArrayCodec::new(T::codec())
    }
}

impl<T: Wire> Wire for BTreeMap<String, T> {
    type Codec = MapCodec<T::Codec>;

    fn codec() -> Self::Codec {
        MapCodec::new(T::codec())
    }
}

impl<T: Wire> Wire for Box<T> {
    type Codec = BoxedCodec<T::Codec>;

    fn codec() -> Self::Codec {
        BoxedCodec(T::codec())
    }
}

/// Codec for `Box<T>` that delegates to the codec of `T`
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxedCodec<C>(pub C);

impl<T, C: Codec<T>> Codec<Box<T>> for BoxedCodec<C> {
    fn encode(&self, value: &Box<T>) -> Value {
        Codec::<T>::encode(&self.0, &**value)
    }

    fn decode(&self, value: &Value) -> Result<Box<T>, DecodeError> {
        Codec::<T>::decode(&self.0, value).map(Box::new)
    }

    fn shape(&self) -> Shape {
        Codec::<T>::shape(&self.0)
    }
}
