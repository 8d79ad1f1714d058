pub mod components;
pub mod lenient;
pub mod server;
pub mod spec;

use serde_json::Value;

use crate::error::ParseError;
use spec::Document;

/// Parse an API description document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let raw: Value = serde_json::from_str(input)?;
    Document::from_value(raw)
}

/// Parse an API description document from YAML.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let raw: Value = serde_yaml_ng::from_str(input)?;
    Document::from_value(raw)
}
