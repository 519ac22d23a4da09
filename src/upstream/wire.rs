//! Helpers for reading upstream JSON.
//!
//! The two microservices do not agree on id representation: the auth
//! service emits numeric ids, the logs service emits strings. The gateway
//! treats every id as a string.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Renders a JSON string or number as a `String`.
///
/// Returns `None` for `null`, booleans, arrays and objects.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads `key` from a JSON object as a string id.
pub fn id_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_string)
}

/// `deserialize_with` helper accepting either a string or a number.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_string(&value).ok_or_else(|| D::Error::custom(format!("invalid id: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[test]
    fn scalar_string_accepts_strings_and_numbers() {
        assert_eq!(scalar_string(&json!("abc")), Some("abc".into()));
        assert_eq!(scalar_string(&json!(12)), Some("12".into()));
        assert_eq!(scalar_string(&json!(null)), None);
        assert_eq!(scalar_string(&json!({ "id": 1 })), None);
    }

    #[test]
    fn id_field_reads_nested_key() {
        let value = json!({ "UserId": 7 });

        assert_eq!(id_field(&value, "UserId"), Some("7".into()));
        assert_eq!(id_field(&value, "missing"), None);
    }

    #[test]
    fn deserialize_id_accepts_both_representations() {
        let a: Record = serde_json::from_value(json!({ "id": 3 })).unwrap();
        let b: Record = serde_json::from_value(json!({ "id": "64f0" })).unwrap();

        assert_eq!(a.id, "3");
        assert_eq!(b.id, "64f0");
    }

    #[test]
    fn deserialize_id_rejects_objects() {
        let result = serde_json::from_value::<Record>(json!({ "id": { "x": 1 } }));

        assert!(result.is_err());
    }
}
