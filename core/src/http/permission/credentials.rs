//! The authenticated principal handed to the permission resolver.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credentials attached to a request by the authentication stage.
///
/// The gate never inspects them; they are passed as-is to the
/// [`PermissionResolver`](crate::http::permission::PermissionResolver).
///
/// # Example
/// ```
/// use actix_permissions_core::http::permission::Credentials;
///
/// let credentials = Credentials::new("alice").with_attribute("tenant", "acme");
/// assert_eq!(credentials.subject(), "alice");
/// assert_eq!(credentials.attribute("tenant").and_then(|v| v.as_str()), Some("acme"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    subject: String,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl Credentials {
    pub fn new(subject: impl Into<String>) -> Self {
        Credentials {
            subject: subject.into(),
            attributes: Map::new(),
        }
    }

    /// Adds an attribute (builder pattern).
    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}
