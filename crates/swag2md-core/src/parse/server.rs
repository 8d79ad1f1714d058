use serde::Deserialize;

use super::lenient;

/// A server URL definition (OpenAPI 3 `servers[]`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,

    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}
