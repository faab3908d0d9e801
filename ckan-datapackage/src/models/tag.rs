use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A CKAN dataset tag. Only the name survives a conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: Value,
}

impl Tag {
    pub fn new<V: Into<Value>>(name: V) -> Tag {
        Tag { name: name.into() }
    }
}
