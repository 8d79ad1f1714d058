//! Deserializers that coerce loosely-typed fields instead of rejecting them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar as text: strings verbatim, numbers and booleans via
/// `Display`, `null` as the empty string, anything else as compact JSON.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(scalar_to_string(&other)),
    })
}

/// Treat an explicit `null` the same as an absent field.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list where `null` (for the list or any entry) is dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().flatten().collect())
}

/// A list of strings where non-string scalars are coerced and `null` is empty.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.iter().map(scalar_to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&json!("abc")), "abc");
        assert_eq!(scalar_to_string(&json!(1.5)), "1.5");
        assert_eq!(scalar_to_string(&json!(42)), "42");
        assert_eq!(scalar_to_string(&json!(true)), "true");
        assert_eq!(scalar_to_string(&json!(null)), "");
        assert_eq!(scalar_to_string(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[derive(Debug, Deserialize)]
    struct Names {
        #[serde(default, deserialize_with = "list")]
        names: Vec<String>,
    }

    #[test]
    fn test_list_drops_null_entries() {
        let names: Names = serde_json::from_value(json!({"names": ["a", null, "b"]})).unwrap();
        assert_eq!(names.names, vec!["a", "b"]);
        let names: Names = serde_json::from_value(json!({"names": null})).unwrap();
        assert!(names.names.is_empty());
    }
}
