use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{decode_or_keep, encode_structured};

/// Represents an extra key-value pair in CKAN datasets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    #[serde(rename = "key")]
    pub key: String,
    #[serde(rename = "value", default)]
    pub value: Value,
}

impl Extra {
    pub fn new(key: String, value: Value) -> Extra {
        Extra { key, value }
    }

    /// Build an extra whose structured value is stored as JSON text, the
    /// only form CKAN keeps in extras.
    pub fn encoded(key: String, value: &Value) -> Extra {
        Extra::new(key, encode_structured(value))
    }

    /// The value with any JSON text decoded back to structured data.
    /// Strings that are not JSON and non-string values come back unchanged.
    pub fn decoded_value(&self) -> Value {
        match &self.value {
            Value::String(text) => decode_or_keep(text),
            other => other.clone(),
        }
    }
}
