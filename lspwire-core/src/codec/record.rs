//! Record codec
//!
//! Maps a struct with a fixed set of named fields to a JSON object. Every
//! field is declared with an explicit wire key; keys are never derived from
//! Rust identifiers, since the protocol spells them in lowerCamelCase.
//!
//! # Field kinds
//!
//! | Declaration  | Rust type   | Absent on encode | Key missing on decode |
//! |--------------|-------------|------------------|-----------------------|
//! | `field`      | `T`         | n/a              | `MissingField`        |
//! | `optional`   | `Option<T>` | key omitted      | `None`                |
//! | `nullable`   | `Option<T>` | `key: null`      | `None`                |
//! | `constant`   | none        | always written   | `MissingField`        |
//!
//! Keys in the input that the record does not declare are ignored, so newer
//! peers can add fields without breaking older ones.
//!
//! # Construction
//!
//! Decoding starts from `R::default()` and assigns each decoded field through
//! its mutable accessor. The half-built record never leaves the codec: any
//! failure discards it.

use super::{Codec, OptionalCodec};
use crate::error::DecodeError;
use crate::value::{Map, Shape, Value, ValueKind};
use std::sync::Arc;

type WriteFn<R> = Box<dyn Fn(&R) -> Option<Value> + Send + Sync>;
type ReadFn<R> = Box<dyn Fn(&mut R, &Value) -> Result<(), DecodeError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

struct FieldCodec<R> {
    key: String,
    presence: Presence,
    write: WriteFn<R>,
    read: ReadFn<R>,
}

/// Struct ↔ JSON object with declared wire keys
///
/// Built with [`RecordCodec::builder`].
///
/// ```rust
/// use lspwire_core::{Codec, IntCodec, RecordCodec, StringCodec, Value};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Item {
///     id: Option<i64>,
///     name: String,
/// }
///
/// let codec = RecordCodec::builder("Item")
///     .optional("id", IntCodec::<i64>::new(), |r: &Item| &r.id, |r: &mut Item| &mut r.id)
///     .field("name", StringCodec, |r: &Item| &r.name, |r: &mut Item| &mut r.name)
///     .build();
///
/// let item = Item { id: None, name: "x".into() };
/// assert_eq!(codec.encode(&item).to_string(), r#"{"name":"x"}"#);
/// assert_eq!(codec.decode(&codec.encode(&item)).unwrap(), item);
/// ```
pub struct RecordCodec<R> {
    name: String,
    fields: Vec<FieldCodec<R>>,
}

impl<R: Default + 'static> RecordCodec<R> {
    /// Start declaring a record; `name` appears in diagnostics
    pub fn builder(name: impl Into<String>) -> RecordBuilder<R> {
        RecordBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }
}

impl<R> RecordCodec<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared wire keys, in encode order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.key.as_str())
    }
}

impl<R: Default> Codec<R> for RecordCodec<R> {
    fn encode(&self, value: &R) -> Value {
        let mut map = Map::with_capacity(self.fields.len());
        for field in &self.fields {
            if let Some(encoded) = (field.write)(value) {
                map.insert(field.key.clone(), encoded);
            }
        }
        Value::Object(map)
    }

    fn decode(&self, value: &Value) -> Result<R, DecodeError> {
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::type_mismatch(Shape::OBJECT, value.kind()))?;

        let mut record = R::default();
        for field in &self.fields {
            match (map.get(&field.key), field.presence) {
                (Some(found), _) => (field.read)(&mut record, found)
                    .map_err(|e| e.at_key(field.key.as_str()))?,
                (None, Presence::Optional) => (field.read)(&mut record, &Value::Null)?,
                (None, Presence::Required) => {
                    return Err(DecodeError::missing_field(field.key.as_str()))
                }
            }
        }
        Ok(record)
    }

    fn shape(&self) -> Shape {
        Shape::OBJECT
    }
}

impl<R> std::fmt::Debug for RecordCodec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCodec")
            .field("name", &self.name)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`RecordCodec`]
///
/// Fields are encoded in declaration order.
///
/// # Panics
///
/// Declaring the same wire key twice panics: one of the two fields could
/// never be read back.
pub struct RecordBuilder<R> {
    name: String,
    fields: Vec<FieldCodec<R>>,
}

impl<R: Default + 'static> RecordBuilder<R> {
    /// Declare a required field
    pub fn field<T, C, G, M>(self, key: impl Into<String>, codec: C, get: G, get_mut: M) -> Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        G: for<'a> Fn(&'a R) -> &'a T + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut T + Send + Sync + 'static,
    {
        let codec = Arc::new(codec);
        let reader = Arc::clone(&codec);

        self.push(FieldCodec {
            key: key.into(),
            presence: Presence::Required,
            write: Box::new(move |record: &R| Some(Codec::<T>::encode(&*codec, get(record)))),
            read: Box::new(move |record: &mut R, value: &Value| {
                *get_mut(record) = Codec::<T>::decode(&*reader, value)?;
                Ok(())
            }),
        })
    }

    /// Declare an optional field whose key is omitted when the value is `None`
    pub fn optional<T, C, G, M>(self, key: impl Into<String>, inner: C, get: G, get_mut: M) -> Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        G: for<'a> Fn(&'a R) -> &'a Option<T> + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut Option<T> + Send + Sync + 'static,
    {
        self.optional_field(key.into(), inner, get, get_mut, false)
    }

    /// Declare an optional field written as `null` when the value is `None`
    pub fn nullable<T, C, G, M>(self, key: impl Into<String>, inner: C, get: G, get_mut: M) -> Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        G: for<'a> Fn(&'a R) -> &'a Option<T> + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut Option<T> + Send + Sync + 'static,
    {
        self.optional_field(key.into(), inner, get, get_mut, true)
    }

    /// Declare a fixed wire constant with no Rust field behind it
    ///
    /// Always written on encode. On decode the key must be present and equal
    /// to `value`.
    pub fn constant(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let expected = value.into();
        let written = expected.clone();
        let record = self.name.clone();

        self.push(FieldCodec {
            key: key.into(),
            presence: Presence::Required,
            write: Box::new(move |_: &R| Some(written.clone())),
            read: Box::new(move |_: &mut R, found: &Value| {
                if *found == expected {
                    Ok(())
                } else {
                    Err(DecodeError::invalid_value(format!(
                        "{record} requires {expected}, found {found}"
                    )))
                }
            }),
        })
    }

    pub fn build(self) -> RecordCodec<R> {
        RecordCodec {
            name: self.name,
            fields: self.fields,
        }
    }

    fn optional_field<T, C, G, M>(self, key: String, inner: C, get: G, get_mut: M, nullable: bool) -> Self
    where
        T: 'static,
        C: Codec<T> + 'static,
        G: for<'a> Fn(&'a R) -> &'a Option<T> + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut Option<T> + Send + Sync + 'static,
    {
        if Codec::<T>::shape(&inner).contains(ValueKind::Null) {
            tracing::debug!(
                record = %self.name,
                key = %key,
                "Optional field over a codec that accepts null; a present null decodes as absent"
            );
        }

        let codec = Arc::new(OptionalCodec::new(inner));
        let reader = Arc::clone(&codec);

        self.push(FieldCodec {
            key,
            presence: Presence::Optional,
            write: Box::new(move |record: &R| {
                let value = get(record);
                if value.is_none() && !nullable {
                    None
                } else {
                    Some(Codec::<Option<T>>::encode(&*codec, value))
                }
            }),
            read: Box::new(move |record: &mut R, value: &Value| {
                *get_mut(record) = Codec::<Option<T>>::decode(&*reader, value)?;
                Ok(())
            }),
        })
    }

    fn push(mut self, field: FieldCodec<R>) -> Self {
        if self.fields.iter().any(|existing| existing.key == field.key) {
            tracing::error!(record = %self.name, key = %field.key, "Duplicate wire key");
            panic!("{} declares wire key `{}` twice", self.name, field.key);
        }
        self.fields.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ArrayCodec, IntCodec, StringCodec, ValueCodec};
    use crate::error::DecodeErrorKind;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Item {
        id: Option<i64>,
        name: String,
    }

    fn item_codec() -> RecordCodec<Item> {
        RecordCodec::builder("Item")
            .optional("id", IntCodec::<i64>::new(), |r: &Item| &r.id, |r: &mut Item| &mut r.id)
            .field("name", StringCodec, |r: &Item| &r.name, |r: &mut Item| &mut r.name)
            .build()
    }

    fn object(pairs: Vec<(&str, Value)>) -> Value {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_encode_present_optional() {
        let codec = item_codec();
        let item = Item {
            id: Some(5),
            name: "x".into(),
        };
        let value = codec.encode(&item);

        assert_eq!(value, object(vec![("id", Value::Int(5)), ("name", Value::from("x"))]));
        assert_eq!(value.to_string(), r#"{"id":5,"name":"x"}"#);
    }

    #[test]
    fn test_absent_optional_is_omitted() {
        let codec = item_codec();
        let item = Item {
            id: None,
            name: "x".into(),
        };
        let value = codec.encode(&item);

        assert_eq!(value.to_string(), r#"{"name":"x"}"#);
        assert!(value.get("id").is_none());
        assert_eq!(codec.decode(&value).unwrap(), item);
    }

    #[test]
    fn test_explicit_null_decodes_as_absent() {
        let codec = item_codec();
        let value = object(vec![("id", Value::Null), ("name", Value::from("x"))]);
        assert_eq!(codec.decode(&value).unwrap().id, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let codec = item_codec();
        let value = object(vec![
            ("name", Value::from("x")),
            ("added", Value::Bool(true)),
            ("id", Value::Int(1)),
        ]);
        assert_eq!(
            codec.decode(&value).unwrap(),
            Item {
                id: Some(1),
                name: "x".into()
            }
        );
    }

    #[test]
    fn test_missing_required_field() {
        let codec = item_codec();
        let err = codec.decode(&object(vec![("id", Value::Int(1))])).unwrap_err();

        assert_eq!(err.kind(), &DecodeErrorKind::MissingField("name".into()));
        assert!(err.path().is_root());
    }

    #[test]
    fn test_field_error_carries_key() {
        let codec = item_codec();
        let value = object(vec![("id", Value::from("five")), ("name", Value::from("x"))]);
        let err = codec.decode(&value).unwrap_err();

        assert_eq!(err.path().to_string(), "$.id");
        assert!(matches!(err.kind(), DecodeErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn test_rejects_non_object() {
        let err = item_codec().decode(&Value::Array(vec![])).unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::TypeMismatch {
                expected: Shape::OBJECT,
                found: ValueKind::Array
            }
        );
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Edit {
        version: Option<i32>,
        lines: Vec<Item>,
    }

    #[test]
    fn test_nullable_and_nested_paths() {
        let codec = RecordCodec::builder("Edit")
            .nullable("version", IntCodec::<i32>::new(), |r: &Edit| &r.version, |r: &mut Edit| &mut r.version)
            .field("lines", ArrayCodec::new(item_codec()), |r: &Edit| &r.lines, |r: &mut Edit| &mut r.lines)
            .build();

        let edit = Edit::default();
        assert_eq!(codec.encode(&edit).to_string(), r#"{"version":null,"lines":[]}"#);

        // A nullable key may still be missing entirely
        let value = object(vec![("lines", Value::Array(vec![]))]);
        assert_eq!(codec.decode(&value).unwrap(), edit);

        let value = object(vec![(
            "lines",
            Value::Array(vec![
                object(vec![("name", Value::from("a"))]),
                object(vec![("name", Value::Int(1))]),
            ]),
        )]);
        let err = codec.decode(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$.lines[1].name");
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Create {
        uri: String,
    }

    fn create_codec() -> RecordCodec<Create> {
        RecordCodec::builder("CreateFile")
            .constant("kind", "create")
            .field("uri", StringCodec, |r: &Create| &r.uri, |r: &mut Create| &mut r.uri)
            .build()
    }

    #[test]
    fn test_constant_written_and_checked() {
        let codec = create_codec();
        let create = Create {
            uri: "file:///a".into(),
        };
        let value = codec.encode(&create);
        assert_eq!(value.to_string(), r#"{"kind":"create","uri":"file:///a"}"#);
        assert_eq!(codec.decode(&value).unwrap(), create);

        let wrong = object(vec![("kind", Value::from("delete")), ("uri", Value::from("x"))]);
        let err = codec.decode(&wrong).unwrap_err();
        assert_eq!(err.path().to_string(), "$.kind");
        assert!(matches!(err.kind(), DecodeErrorKind::InvalidValue(_)));

        let missing = object(vec![("uri", Value::from("x"))]);
        assert_eq!(
            codec.decode(&missing).unwrap_err().kind(),
            &DecodeErrorKind::MissingField("kind".into())
        );
    }

    #[test]
    #[should_panic(expected = "Item declares wire key `name` twice")]
    fn test_duplicate_key_is_rejected() {
        RecordCodec::builder("Item")
            .field("name", StringCodec, |r: &Item| &r.name, |r: &mut Item| &mut r.name)
            .optional("name", IntCodec::<i64>::new(), |r: &Item| &r.id, |r: &mut Item| &mut r.id)
            .build();
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Payload {
        data: Option<Value>,
    }

    #[test]
    fn test_optional_any_value_collapses_null() {
        let codec = RecordCodec::builder("Payload")
            .optional("data", ValueCodec, |r: &Payload| &r.data, |r: &mut Payload| &mut r.data)
            .build();

        let present = object(vec![("data", Value::Int(1))]);
        assert_eq!(codec.decode(&present).unwrap().data, Some(Value::Int(1)));

        let null = object(vec![("data", Value::Null)]);
        assert_eq!(codec.decode(&null).unwrap().data, None);
    }
}
