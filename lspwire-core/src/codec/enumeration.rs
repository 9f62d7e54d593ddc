//! Codec for enumerations of wire constants
//!
//! Protocol enumerations are either integer-valued (`DiagnosticSeverity`,
//! `TextDocumentSyncKind`) or string-valued (`MarkupKind`). The declaration
//! supplies every Rust constant and a total mapping to its wire constant; the
//! decoder looks the incoming value up among those constants.
//!
//! [`wire_enum!`](crate::wire_enum) declares the Rust enum, its constant table
//! and its [`Wire`](crate::Wire) impl in one go:
//!
//! ```rust
//! use lspwire_core::{from_value, to_value, wire_enum, Value};
//!
//! wire_enum! {
//!     pub enum TraceValue {
//!         Off = "off",
//!         Messages = "messages",
//!         Verbose = "verbose",
//!     }
//! }
//!
//! assert_eq!(to_value(&TraceValue::Verbose), Value::from("verbose"));
//! assert_eq!(from_value::<TraceValue>(&Value::from("off")).unwrap(), TraceValue::Off);
//! assert!(from_value::<TraceValue>(&Value::from("loud")).is_err());
//! ```

use super::Codec;
use crate::error::DecodeError;
use crate::value::{Shape, Value};

/// Enumeration ↔ one of a declared set of wire constants
pub struct EnumCodec<E: 'static> {
    name: &'static str,
    variants: &'static [E],
    to_wire: fn(E) -> Value,
}

impl<E: Copy + Send + Sync + 'static> EnumCodec<E> {
    /// Declare an enumeration
    ///
    /// `variants` lists every constant; `to_wire` maps each one to its wire
    /// value and should be an exhaustive `match`.
    pub const fn new(name: &'static str, variants: &'static [E], to_wire: fn(E) -> Value) -> Self {
        Self {
            name,
            variants,
            to_wire,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: 'static> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for EnumCodec<E> {}

impl<E: Copy + Send + Sync + 'static> Codec<E> for EnumCodec<E> {
    fn encode(&self, value: &E) -> Value {
        (self.to_wire)(*value)
    }

    fn decode(&self, value: &Value) -> Result<E, DecodeError> {
        let shape = self.shape();
        if !shape.contains(value.kind()) {
            return Err(DecodeError::type_mismatch(shape, value.kind()));
        }
        self.variants
            .iter()
            .copied()
            .find(|variant| (self.to_wire)(*variant) == *value)
            .ok_or_else(|| {
                DecodeError::invalid_value(format!("{} is not a valid {}", value, self.name))
            })
    }

    fn shape(&self) -> Shape {
        let shape = self
            .variants
            .iter()
            .fold(Shape::NONE, |acc, variant| {
                acc.union(Shape::of((self.to_wire)(*variant).kind()))
            });
        // Integer constants are written as Int or UInt but read back as either
        if shape.contains(crate::ValueKind::Int) || shape.contains(crate::ValueKind::UInt) {
            shape.union(Shape::INTEGER)
        } else {
            shape
        }
    }
}

/// Declare an enumeration of wire constants
///
/// The first variant is the `Default`. Constants are string or integer
/// literals.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident = $first_value:literal
            $(, $(#[$variant_meta:meta])* $variant:ident = $value:literal)*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(#[$first_meta])*
            #[default]
            $first,
            $($(#[$variant_meta])* $variant,)*
        }

        impl $name {
            /// Every constant, in declaration order
            pub const ALL: &'static [$name] = &[$name::$first, $($name::$variant),*];

            /// The wire constant for this value
            pub fn to_wire(self) -> $crate::Value {
                match self {
                    $name::$first => $crate::Value::from($first_value),
                    $($name::$variant => $crate::Value::from($value),)*
                }
            }
        }

        impl $crate::Wire for $name {
            type Codec = $crate::EnumCodec<$name>;

            fn codec() -> Self::Codec {
                $crate::EnumCodec::new(::std::stringify!($name), $name::ALL, $name::to_wire)
            }
        }
    };
}
