//! Field access helpers over untyped JSON objects

use crate::error::{DecodeError, DecodeResult};
use serde_json::{Map, Value};

pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::type_mismatch(path, "object"))
}

/// Present and not `null`
pub(crate) fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

pub(crate) fn required<'a>(object: &'a Map<String, Value>, name: &str, context: &str) -> DecodeResult<&'a Value> {
    field(object, name).ok_or_else(|| DecodeError::missing_field(context, name))
}

pub(crate) fn required_str<'a>(object: &'a Map<String, Value>, name: &str, context: &str) -> DecodeResult<&'a str> {
    required(object, name, context)?
        .as_str()
        .ok_or_else(|| DecodeError::type_mismatch(format!("{context}.{name}"), "string"))
}

pub(crate) fn optional_str<'a>(
    object: &'a Map<String, Value>,
    name: &str,
    context: &str,
) -> DecodeResult<Option<&'a str>> {
    match field(object, name) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| DecodeError::type_mismatch(format!("{context}.{name}"), "string")),
    }
}

pub(crate) fn required_i64(object: &Map<String, Value>, name: &str, context: &str) -> DecodeResult<i64> {
    required(object, name, context)?
        .as_i64()
        .ok_or_else(|| DecodeError::type_mismatch(format!("{context}.{name}"), "integer"))
}

pub(crate) fn optional_i64(object: &Map<String, Value>, name: &str, context: &str) -> DecodeResult<Option<i64>> {
    match field(object, name) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| DecodeError::type_mismatch(format!("{context}.{name}"), "integer")),
    }
}

pub(crate) fn required_array<'a>(
    object: &'a Map<String, Value>,
    name: &str,
    context: &str,
) -> DecodeResult<&'a Vec<Value>> {
    required(object, name, context)?
        .as_array()
        .ok_or_else(|| DecodeError::type_mismatch(format!("{context}.{name}"), "array"))
}
