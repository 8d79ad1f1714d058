//! Typed accessors over the raw JSON tree. None of these panic on shape
//! mismatches; a wrong type reads as absent.

use serde_json::{Map, Value};

use crate::error::{Entity, MissingFieldError};
use crate::parse::lenient::scalar_to_string;

/// A string, number or boolean field as text. `null`, objects and arrays
/// count as absent.
pub fn scalar(node: &Value, field: &str) -> Option<String> {
    match node.get(field)? {
        value @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
            Some(scalar_to_string(value))
        }
        _ => None,
    }
}

/// Like [`scalar`], but absence is a [`MissingFieldError`].
pub fn required_scalar(
    node: &Value,
    field: &str,
    entity: Entity,
    location: &str,
) -> Result<String, MissingFieldError> {
    scalar(node, field).ok_or_else(|| MissingFieldError::new(entity, field, location))
}

pub fn object<'v>(node: &'v Value, field: &str) -> Option<&'v Map<String, Value>> {
    node.get(field).and_then(Value::as_object)
}

/// An array field, empty when absent or not an array.
pub fn array<'v>(node: &'v Value, field: &str) -> &'v [Value] {
    node.get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// The scalar entries of an array field as text.
pub fn string_list(node: &Value, field: &str) -> Vec<String> {
    array(node, field)
        .iter()
        .filter(|v| matches!(v, Value::String(_) | Value::Number(_) | Value::Bool(_)))
        .map(scalar_to_string)
        .collect()
}
