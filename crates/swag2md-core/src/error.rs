use std::fmt;

use thiserror::Error;

use crate::terms::Locale;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty input: no API description text supplied")]
    EmptyInput,

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("top-level value must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// The kind of entity a missing field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Operation,
    Response,
    Parameter,
    Property,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Operation => "operation",
            Entity::Response => "response",
            Entity::Parameter => "parameter",
            Entity::Property => "property",
        };
        f.write_str(name)
    }
}

/// A semantically required field is absent (or has no usable scalar value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required {entity} field `{field}` at {location}")]
pub struct MissingFieldError {
    pub entity: Entity,
    pub field: String,
    pub location: String,
}

impl MissingFieldError {
    pub fn new(entity: Entity, field: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            entity,
            field: field.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("empty input: no API description text supplied")]
    EmptyInput,

    #[error("malformed input: {0}")]
    MalformedInput(ParseError),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

impl From<ParseError> for AnalyzeError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyInput => AnalyzeError::EmptyInput,
            other => AnalyzeError::MalformedInput(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum TermsError {
    #[error("unsupported locale: {0} (expected one of: en, zh)")]
    UnsupportedLocale(String),

    #[error("malformed term dictionary for locale {locale}: {source}")]
    Malformed {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("term dictionary for locale {locale} is missing keys: {}", keys.join(", "))]
    MissingKeys { locale: Locale, keys: Vec<String> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
