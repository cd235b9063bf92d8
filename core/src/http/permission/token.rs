//! `resource:action` permission tokens.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde_json::Value;

use crate::http::error::PermissionFault;

/// Exactly two non-empty parts around a single `:`.
const TOKEN_PATTERN: &str = r"^([^:]+):([^:]+)$";

/// A parsed permission token.
///
/// # Example
/// ```
/// use actix_permissions_core::http::permission::PermissionToken;
///
/// let token: PermissionToken = "cars:read".parse().unwrap();
/// assert_eq!(token.resource(), "cars");
/// assert_eq!(token.action(), "read");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PermissionToken {
    resource: String,
    action: String,
}

impl PermissionToken {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        PermissionToken {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// Parses a raw token as declared in route configuration.
    ///
    /// Non-string values fault with [`PermissionFault::NotAString`].
    pub fn from_value(value: &Value) -> Result<Self, PermissionFault> {
        match value {
            Value::String(s) => s.parse(),
            _ => Err(PermissionFault::NotAString),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl FromStr for PermissionToken {
    type Err = PermissionFault;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Regex::new(TOKEN_PATTERN) {
            Ok(re) => {
                let caps = re.captures(s).ok_or(PermissionFault::Malformed)?;
                Ok(PermissionToken::new(&caps[1], &caps[2]))
            }
            Err(e) => {
                log::error!("permission token pattern does not compile: {}", e);
                Err(PermissionFault::Malformed)
            }
        }
    }
}

impl fmt::Display for PermissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}
