use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Components object. Only the schema catalog is read directly; shared
/// responses and parameters are reached through `$ref` on the raw tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    #[serde(deserialize_with = "lenient::or_default")]
    pub schemas: IndexMap<String, Value>,
}
