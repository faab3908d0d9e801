use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Data Package license object
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
}

impl License {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.title.is_none() && self.url.is_none()
    }
}

/// The two shapes a package `license` field takes
#[derive(Clone, Debug, PartialEq)]
pub enum LicenseRef {
    /// A bare license identifier such as `"cc-by"`
    Identifier(String),
    /// A `{type, title, url}` object
    Detailed(License),
}

impl LicenseRef {
    /// Classify a raw `license` value. Anything other than a string or an
    /// object yields `None`.
    pub fn from_value(value: &Value) -> Option<LicenseRef> {
        match value {
            Value::String(id) => Some(LicenseRef::Identifier(id.clone())),
            Value::Object(_) => serde_json::from_value(value.clone())
                .ok()
                .map(LicenseRef::Detailed),
            _ => None,
        }
    }
}
