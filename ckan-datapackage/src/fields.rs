//! Helpers for reading loosely-typed metadata records.

use serde_json::{Map, Value};

/// Whether a value counts as set. `null`, `false`, zero, empty strings,
/// empty arrays and empty objects are all treated as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Look up `key`, returning it only when it holds a truthy value.
pub fn present<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| is_truthy(value))
}

/// Render a value as plain text: strings as-is, anything else as JSON.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Lower-case, ASCII, hyphen-joined form of `text`.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// Decode `text` as JSON, keeping the raw string when it does not parse.
pub fn decode_or_keep(text: &str) -> Value {
    match serde_json::from_str(text) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::trace!("keeping raw string, not JSON: {err}");
            Value::String(text.to_owned())
        }
    }
}

/// Encode arrays and objects as JSON text; scalars pass through untouched.
pub fn encode_structured(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => Value::String(value.to_string()),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!(-2.5), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_present_skips_empty_values() {
        let record = json!({"title": "", "version": "1.0"});
        let record = record.as_object().unwrap();
        assert_eq!(present(record, "title"), None);
        assert_eq!(present(record, "version"), Some(&json!("1.0")));
        assert_eq!(present(record, "missing"), None);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Économie & Société"), "economie-societe");
        assert_eq!(slugify(&slugify("Already Slugged")), "already-slugged");
    }

    #[test]
    fn test_decode_or_keep() {
        assert_eq!(decode_or_keep(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(decode_or_keep("42"), json!(42));
        assert_eq!(decode_or_keep("plain"), json!("plain"));
        assert_eq!(decode_or_keep("data/schema.json"), json!("data/schema.json"));
    }

    #[test]
    fn test_encode_structured() {
        assert_eq!(encode_structured(&json!({"a": 1})), json!(r#"{"a":1}"#));
        assert_eq!(encode_structured(&json!([1, 2])), json!("[1,2]"));
        assert_eq!(encode_structured(&json!("text")), json!("text"));
        assert_eq!(encode_structured(&json!(3)), json!(3));
    }
}
