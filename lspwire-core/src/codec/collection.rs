//! Array and map codecs

use super::Codec;
use crate::error::DecodeError;
use crate::value::{Map, Shape, Value};
use std::collections::BTreeMap;

/// `Vec<T>` ↔ JSON array
///
/// A failing element extends the error path with its index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayCodec<C> {
    element: C,
}

impl<C> ArrayCodec<C> {
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<T, C: Codec<T>> Codec<Vec<T>> for ArrayCodec<C> {
    fn encode(&self, value: &Vec<T>) -> Value {
        Value::Array(value.iter().map(|item| self.element.encode(item)).collect())
    }

    fn decode(&self, value: &Value) -> Result<Vec<T>, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::type_mismatch(Shape::ARRAY, value.kind()))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.element.decode(item).map_err(|e| e.at_index(index)))
            .collect()
    }

    fn shape(&self) -> Shape {
        Shape::ARRAY
    }
}

/// `BTreeMap<String, T>` ↔ JSON object with arbitrary keys
///
/// Encodes in key order, so equal maps always produce the same object. A
/// failing entry extends the error path with its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapCodec<C> {
    entry: C,
}

impl<C> MapCodec<C> {
    pub fn new(entry: C) -> Self {
        Self { entry }
    }
}

impl<T, C: Codec<T>> Codec<BTreeMap<String, T>> for MapCodec<C> {
    fn encode(&self, value: &BTreeMap<String, T>) -> Value {
        let map: Map = value
            .iter()
            .map(|(key, item)| (key.clone(), self.entry.encode(item)))
            .collect();
        Value::Object(map)
    }

    fn decode(&self, value: &Value) -> Result<BTreeMap<String, T>, DecodeError> {
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::type_mismatch(Shape::OBJECT, value.kind()))?;

        map.iter()
            .map(|(key, item)| {
                self.entry
                    .decode(item)
                    .map(|decoded| (key.clone(), decoded))
                    .map_err(|e| e.at_key(key.as_str()))
            })
            .collect()
    }

    fn shape(&self) -> Shape {
        Shape::OBJECT
    }
}
