//! JSON text boundary
//!
//! Codecs work on [`Value`] trees only. This module turns JSON text into a
//! `Value` and back using `serde_json`, so text tokenization stays in one
//! well-tested place.
//!
//! # Numbers
//!
//! Integers that fit `i64` become [`Value::Int`]; larger non-negative integers
//! become [`Value::UInt`]. Everything else with a fraction or exponent becomes
//! [`Value::Float`].
//!
//! # Errors
//!
//! - Malformed text → [`Error::Json`]
//! - A non-finite float (no JSON spelling) → [`Error::Serialization`]
//! - A codec rejecting the parsed tree → [`Error::Decode`]
//!
//! # Examples
//!
//! ```rust
//! use lspwire_core::{json, IntCodec, OptionalCodec, Value};
//!
//! let value = json::from_str(r#"{"line": 3, "character": 7}"#).unwrap();
//! assert_eq!(value.get("line"), Some(&Value::Int(3)));
//!
//! let codec = OptionalCodec::new(IntCodec::<u32>::new());
//! assert_eq!(json::decode_from_str(&codec, "null").unwrap(), None);
//! assert_eq!(json::encode_to_string(&codec, &Some(4)).unwrap(), "4");
//! ```

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::value::{Map, Value};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::UInt(n) => serializer.serialize_u64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(n) => Err(ser::Error::custom(format!(
                "{n} cannot be represented in JSON"
            ))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    out.serialize_entry(key, item)?;
                }
                out.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> std::result::Result<Value, E> {
        Ok(match i64::try_from(n) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::UInt(n),
        })
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> std::result::Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, item)) = access.next_entry::<String, Value>()? {
            // Duplicate keys: last one wins, like serde_json
            map.insert(key, item);
        }
        Ok(Value::Object(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Convert into a `serde_json::Value`
///
/// Fails only for non-finite floats.
pub fn to_json_value(value: &Value) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Parse JSON text into a value tree
pub fn from_str(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| Error::Json(e.to_string()))
}

/// Parse JSON bytes into a value tree
pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| Error::Json(e.to_string()))
}

/// Write a value tree as compact JSON text
pub fn to_string(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Write a value tree as indented JSON text
pub fn to_string_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode `value` with `codec` and write the result as JSON text
pub fn encode_to_string<T, C: Codec<T> + ?Sized>(codec: &C, value: &T) -> Result<String> {
    to_string(&codec.encode(value))
}

/// Parse JSON text and decode it with `codec`
pub fn decode_from_str<T, C: Codec<T> + ?Sized>(codec: &C, text: &str) -> Result<T> {
    let value = from_str(text)?;
    Ok(codec.decode(&value)?)
}
