use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use super::access;
use super::{Extractor, MISSING_EXAMPLE};
use crate::error::{Entity, MissingFieldError};
use crate::ir::{Component, Property};
use crate::parse::spec::ref_name;

impl Extractor<'_> {
    /// One [`Component`] per schema-catalog entry, sorted by name, with
    /// properties sorted by name.
    pub fn extract_components(&mut self) -> Result<Vec<Component>, MissingFieldError> {
        let schemas = self.doc.schemas();
        let mut names: Vec<&String> = schemas.keys().collect();
        names.sort();

        let mut components = Vec::with_capacity(names.len());
        for name in names {
            components.push(extract_component(name, &schemas[name.as_str()])?);
        }
        log::debug!("extracted {} components", components.len());
        Ok(components)
    }
}

fn extract_component(name: &str, schema: &Value) -> Result<Component, MissingFieldError> {
    let required: HashSet<String> = access::string_list(schema, "required").into_iter().collect();

    let mut properties = Vec::new();
    if let Some(props) = access::object(schema, "properties") {
        let mut prop_names: Vec<&String> = props.keys().collect();
        prop_names.sort();
        for prop_name in prop_names {
            properties.push(extract_property(
                name,
                prop_name,
                &props[prop_name.as_str()],
                &required,
            )?);
        }
    }

    Ok(Component {
        name: name.to_string(),
        schema_type: declared_type(schema),
        properties,
        source: pretty_json(schema),
    })
}

fn extract_property(
    component: &str,
    name: &str,
    node: &Value,
    required: &HashSet<String>,
) -> Result<Property, MissingFieldError> {
    let property_type = match declared_type(node) {
        Some(t) if t == "array" => {
            let item = node.get("items").and_then(declared_type).ok_or_else(|| {
                MissingFieldError::new(
                    Entity::Property,
                    "items.type",
                    format!("property {name} of component {component}"),
                )
            })?;
            Some(format!("array<{item}>"))
        }
        other => other,
    };

    Ok(Property {
        name: name.to_string(),
        property_type,
        example: example_text(node.get("example")),
        required: required.contains(name),
    })
}

/// The `type` keyword of a schema node, falling back to the target name of
/// its `$ref`. A type list (`["string", "null"]`) is joined with `|`.
pub(crate) fn declared_type(node: &Value) -> Option<String> {
    match node.get("type") {
        Some(Value::Array(types)) => {
            let names: Vec<&str> = types.iter().filter_map(Value::as_str).collect();
            if !names.is_empty() {
                return Some(names.join("|"));
            }
        }
        Some(_) => {
            if let Some(t) = access::scalar(node, "type") {
                return Some(t);
            }
        }
        None => {}
    }
    node.get("$ref")
        .and_then(Value::as_str)
        .map(|r| ref_name(r).to_string())
}

/// Like [`declared_type`], with arrays expanded to `array<T>` where the item
/// type is known.
pub(crate) fn type_label(node: &Value) -> Option<String> {
    let declared = declared_type(node)?;
    if declared != "array" {
        return Some(declared);
    }
    Some(match node.get("items").and_then(declared_type) {
        Some(item) => format!("array<{item}>"),
        None => declared,
    })
}

fn example_text(example: Option<&Value>) -> String {
    let text = match example {
        None | Some(Value::Null) => return MISSING_EXAMPLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    if text.is_empty() {
        MISSING_EXAMPLE.to_string()
    } else {
        text
    }
}

/// Pretty-print with four-space indentation.
fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}
