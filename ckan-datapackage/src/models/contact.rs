use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Name <email>`; the email part is optional.
static AUTHOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<name>[^<]+)(?:<(?P<email>\S+)>)?").unwrap());

/// A person with an optional email, the Data Package `author` object
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Parse an author string of the form `Jane Doe <jane@example.org>`.
    ///
    /// The name is everything before the first `<`; the email is the text
    /// inside the brackets when present. Returns `None` when the string has
    /// no name part at all.
    pub fn parse(text: &str) -> Option<Contact> {
        let captures = AUTHOR_PATTERN.captures(text)?;
        Some(Contact {
            name: captures
                .name("name")
                .map(|m| Value::String(m.as_str().to_owned())),
            email: captures
                .name("email")
                .map(|m| Value::String(m.as_str().to_owned())),
        })
    }
}

/// One entry of a Data Package `sources` list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<Value>,
}

impl Source {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.web.is_none()
    }
}

/// The two shapes a package `author` field takes
#[derive(Clone, Debug, PartialEq)]
pub enum AuthorRef {
    /// `"Name <email>"` text
    Text(String),
    /// A `{name, email}` object
    Contact(Contact),
}

impl AuthorRef {
    pub fn from_value(value: &Value) -> Option<AuthorRef> {
        match value {
            Value::String(text) => Some(AuthorRef::Text(text.clone())),
            Value::Object(_) => serde_json::from_value(value.clone())
                .ok()
                .map(AuthorRef::Contact),
            _ => None,
        }
    }

    /// Resolve either shape into a contact.
    pub fn into_contact(self) -> Option<Contact> {
        match self {
            AuthorRef::Text(text) => Contact::parse(&text),
            AuthorRef::Contact(contact) => Some(contact),
        }
    }
}
