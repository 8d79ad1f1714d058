use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::components::Components;
use super::lenient;
use super::server::Server;
use crate::error::ParseError;

/// Which document shape was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A top-level `openapi` field is present.
    OpenApi3,
    /// No `openapi` field, but a top-level `swagger` field is present.
    Swagger2,
    /// Neither marker; rendered like OpenAPI 3.
    Unknown,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::OpenApi3 => "OpenAPI",
            DocumentKind::Swagger2 => "Swagger",
            DocumentKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,

    #[serde(deserialize_with = "lenient::string")]
    pub description: String,

    #[serde(deserialize_with = "lenient::string")]
    pub version: String,

    #[serde(deserialize_with = "lenient::or_default")]
    pub contact: Contact,

    #[serde(deserialize_with = "lenient::or_default")]
    pub license: License,
}

/// Contact information.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
}

impl Contact {
    /// Non-empty fields as `(label, value)` pairs, in a fixed order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_str()),
            ("url", self.url.as_str()),
            ("email", self.email.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// License information.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
}

impl License {
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [("name", self.name.as_str()), ("url", self.url.as_str())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

/// A decoded API description. Both OpenAPI 3 and Swagger 2 shapes land in
/// the same struct; fields the received shape doesn't carry stay empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub openapi: Option<String>,

    #[serde(deserialize_with = "lenient::opt_string")]
    pub swagger: Option<String>,

    #[serde(deserialize_with = "lenient::or_default")]
    pub info: Info,

    #[serde(deserialize_with = "lenient::list")]
    pub servers: Vec<Server>,

    #[serde(deserialize_with = "lenient::list")]
    pub tags: Vec<Tag>,

    /// Path template → raw path item (method → operation).
    #[serde(deserialize_with = "lenient::or_default")]
    pub paths: IndexMap<String, Value>,

    #[serde(deserialize_with = "lenient::or_default")]
    pub components: Components,

    // Swagger 2 only
    #[serde(deserialize_with = "lenient::string")]
    pub host: String,

    #[serde(rename = "basePath", deserialize_with = "lenient::string")]
    pub base_path: String,

    #[serde(deserialize_with = "lenient::string_list")]
    pub schemes: Vec<String>,

    #[serde(deserialize_with = "lenient::string_list")]
    pub consumes: Vec<String>,

    #[serde(deserialize_with = "lenient::string_list")]
    pub produces: Vec<String>,

    #[serde(deserialize_with = "lenient::or_default")]
    pub definitions: IndexMap<String, Value>,

    #[serde(skip)]
    raw: Value,
}

impl Document {
    /// Decode a document from an already-parsed JSON tree, keeping the tree
    /// for `$ref` resolution.
    pub fn from_value(raw: Value) -> Result<Self, ParseError> {
        let found = match &raw {
            Value::Object(_) => None,
            Value::Null => Some("null"),
            Value::Bool(_) => Some("a boolean"),
            Value::Number(_) => Some("a number"),
            Value::String(_) => Some("a string"),
            Value::Array(_) => Some("an array"),
        };
        if let Some(found) = found {
            return Err(ParseError::NotAnObject(found));
        }

        let mut doc = Document::deserialize(&raw)?;
        doc.raw = raw;
        log::debug!(
            "decoded {} document: {} paths, {} schemas",
            doc.kind(),
            doc.paths.len(),
            doc.schemas().len()
        );
        Ok(doc)
    }

    pub fn kind(&self) -> DocumentKind {
        if self.openapi.is_some() {
            DocumentKind::OpenApi3
        } else if self.swagger.is_some() {
            DocumentKind::Swagger2
        } else {
            DocumentKind::Unknown
        }
    }

    /// Format line such as `OpenAPI 3.0.1` or `Swagger 2.0`.
    pub fn format_version(&self) -> Option<String> {
        let version = match self.kind() {
            DocumentKind::OpenApi3 => self.openapi.as_deref(),
            DocumentKind::Swagger2 => self.swagger.as_deref(),
            DocumentKind::Unknown => None,
        }?;
        Some(format!("{} {}", self.kind(), version))
    }

    /// The schema catalog: `components.schemas`, falling back to Swagger 2
    /// `definitions` when that is empty.
    pub fn schemas(&self) -> &IndexMap<String, Value> {
        if self.components.schemas.is_empty() {
            &self.definitions
        } else {
            &self.components.schemas
        }
    }

    /// Resolve a local `$ref` such as `#/components/schemas/Pet`.
    pub fn resolve_ref(&self, reference: &str) -> Option<&Value> {
        let pointer = reference.strip_prefix('#')?;
        self.raw.pointer(pointer)
    }
}

/// Last segment of a `$ref` pointer, used as a display name.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
