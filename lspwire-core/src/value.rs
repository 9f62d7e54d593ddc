//! Generic JSON-like value tree
//!
//! Every codec in this crate reads and writes through [`Value`]. It is the only
//! boundary between typed Rust data and the JSON text on the wire: text is
//! turned into a `Value` by the [`json`](crate::json) module, and codecs turn a
//! `Value` into typed data.
//!
//! # Numbers
//!
//! Integers are split into `Int` (signed) and `UInt` (unsigned, for values above
//! `i64::MAX`). Both compare by numeric value, so `Int(5) == UInt(5)`; a value
//! that went through JSON text may come back in the other variant and must still
//! be equal. Floats are kept separate and never compare equal to integers.
//!
//! # Objects
//!
//! Objects keep insertion order (decode-then-encode round trips reproduce the
//! key order), but equality ignores order and no decoder looks at key order.

use indexmap::IndexMap;
use std::fmt;

/// Ordered string-keyed mapping used for [`Value::Object`]
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed JSON value
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// JSON `null`
    #[default]
    Null,
    /// JSON `true` / `false`
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer, used for values that do not fit `i64`
    UInt(u64),
    /// Finite floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Object with unique keys in insertion order
    Object(Map),
    /// Ordered sequence
    Array(Vec<Value>),
}

/// The kind of a [`Value`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Object,
    Array,
}

impl ValueKind {
    const ALL: [ValueKind; 8] = [
        ValueKind::Null,
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::UInt,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Object,
        ValueKind::Array,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Lower-case name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::UInt => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`ValueKind`]s a codec can possibly accept
///
/// Shapes are conservative: a codec whose shape excludes a kind must fail on
/// every value of that kind. The reverse does not hold, a kind inside the shape
/// may still be rejected by the full decode.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape(u8);

impl Shape {
    pub const NONE: Shape = Shape(0);
    pub const ANY: Shape = Shape(0xff);
    pub const NULL: Shape = Shape(1 << ValueKind::Null as u8);
    pub const BOOL: Shape = Shape(1 << ValueKind::Bool as u8);
    pub const INTEGER: Shape = Shape((1 << ValueKind::Int as u8) | (1 << ValueKind::UInt as u8));
    pub const NUMBER: Shape = Shape(
        (1 << ValueKind::Int as u8) | (1 << ValueKind::UInt as u8) | (1 << ValueKind::Float as u8),
    );
    pub const STRING: Shape = Shape(1 << ValueKind::String as u8);
    pub const OBJECT: Shape = Shape(1 << ValueKind::Object as u8);
    pub const ARRAY: Shape = Shape(1 << ValueKind::Array as u8);

    /// Shape containing exactly one kind
    pub fn of(kind: ValueKind) -> Shape {
        Shape(kind.bit())
    }

    pub fn contains(self, kind: ValueKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn union(self, other: Shape) -> Shape {
        Shape(self.0 | other.0)
    }

    pub fn without(self, other: Shape) -> Shape {
        Shape(self.0 & !other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the kinds contained in this shape
    pub fn kinds(self) -> impl Iterator<Item = ValueKind> {
        ValueKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Shape::ANY {
            return f.write_str("any value");
        }
        if self.is_empty() {
            return f.write_str("nothing");
        }
        // Int and UInt read as one kind to the reader of an error message
        let mut names: Vec<&str> = Vec::new();
        for kind in self.kinds() {
            let name = match kind {
                ValueKind::Int | ValueKind::UInt => "integer",
                other => other.name(),
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        f.write_str(&names.join(" or "))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", self)
    }
}

impl Value {
    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value as `i64`, if it is an integer that fits
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::UInt(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Integer value as `u64`, if it is a non-negative integer
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(n) => u64::try_from(*n).ok(),
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Any numeric value widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key if this value is an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(a), Value::UInt(b)) | (Value::UInt(b), Value::Int(a)) => {
                u64::try_from(*a).map_or(false, |a| a == *b)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            // IndexMap equality is order-insensitive
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

/// JSON string literal with RFC 8259 escapes
fn write_json_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

impl fmt::Display for Value {
    /// Compact JSON rendering, for logs and error messages
    ///
    /// Non-finite floats have no JSON spelling and render as `null`, as
    /// `serde_json` writes them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) if n.is_finite() => {
                let number = serde_json::to_string(n).map_err(|_| fmt::Error)?;
                f.write_str(&number)
            }
            Value::Float(_) => f.write_str("null"),
            Value::String(s) => write_json_str(f, s),
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_str(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str("}")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(i64::from(n))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(u64::from(n))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
