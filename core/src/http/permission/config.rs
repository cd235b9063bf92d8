//! Gate configuration.

use serde::Deserialize;

/// Settings shared by every route a gate protects.
///
/// Can be built in code or read from a configuration section:
///
/// ```
/// use actix_permissions_core::http::permission::GateConfig;
///
/// let from_code = GateConfig::new().realm("fleet").deny_message("Missing permission");
/// let from_file: GateConfig =
///     serde_json::from_str(r#"{"realm":"fleet","deny_message":"Missing permission"}"#).unwrap();
///
/// assert_eq!(from_code, from_file);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    realm: Option<String>,
    deny_message: String,
}

impl GateConfig {
    /// No realm, deny message `"Unauthorized"`.
    pub fn new() -> Self {
        GateConfig {
            realm: None,
            deny_message: "Unauthorized".to_string(),
        }
    }

    /// Adds a `WWW-Authenticate` header with this realm to 401 responses.
    pub fn realm(mut self, realm: &str) -> Self {
        self.realm = Some(realm.to_string());
        self
    }

    /// Sets the message of the 401 response body.
    pub fn deny_message(mut self, message: &str) -> Self {
        self.deny_message = message.to_string();
        self
    }

    pub fn get_realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn get_deny_message(&self) -> &str {
        &self.deny_message
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new()
    }
}
