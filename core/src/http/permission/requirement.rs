//! Per-route permission requirements.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::http::error::PermissionFault;
use crate::http::permission::token::PermissionToken;

/// The permissions a route declares, in declaration order.
///
/// Tokens are kept raw until request time so that a misconfigured route
/// faults when it is hit, with the same messages whether the requirement
/// came from code, a JSON config file or the `#[permissions]` macro.
///
/// # Example
/// ```
/// use actix_permissions_core::http::permission::PermissionRequirement;
///
/// let single = PermissionRequirement::from("cars:read");
/// let many = PermissionRequirement::from(vec!["cars:read"]);
/// assert_eq!(single, many);
/// assert!(PermissionRequirement::none().is_unrestricted());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PermissionRequirement {
    tokens: Vec<Value>,
}

impl PermissionRequirement {
    /// No restriction.
    pub fn none() -> Self {
        PermissionRequirement { tokens: Vec::new() }
    }

    /// Builds a requirement from a route configuration value.
    ///
    /// `null` means no restriction, an array is taken as the token list and
    /// any other value is a single token.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::none(),
            Value::Array(tokens) => PermissionRequirement { tokens },
            other => PermissionRequirement {
                tokens: vec![other],
            },
        }
    }

    pub fn from_values(tokens: Vec<Value>) -> Self {
        PermissionRequirement { tokens }
    }

    /// True when the route is not restricted at all.
    pub fn is_unrestricted(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn raw_tokens(&self) -> &[Value] {
        &self.tokens
    }

    /// Parses every token in declaration order.
    ///
    /// The first malformed token aborts with its fault.
    pub fn parse(&self) -> Result<Vec<PermissionToken>, PermissionFault> {
        self.tokens.iter().map(PermissionToken::from_value).collect()
    }
}

impl From<&str> for PermissionRequirement {
    fn from(token: &str) -> Self {
        PermissionRequirement {
            tokens: vec![Value::from(token)],
        }
    }
}

impl From<String> for PermissionRequirement {
    fn from(token: String) -> Self {
        PermissionRequirement {
            tokens: vec![Value::from(token)],
        }
    }
}

impl From<&[&str]> for PermissionRequirement {
    fn from(tokens: &[&str]) -> Self {
        PermissionRequirement {
            tokens: tokens.iter().map(|t| Value::from(*t)).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for PermissionRequirement {
    fn from(tokens: [&str; N]) -> Self {
        PermissionRequirement::from(&tokens[..])
    }
}

impl From<Vec<&str>> for PermissionRequirement {
    fn from(tokens: Vec<&str>) -> Self {
        PermissionRequirement::from(tokens.as_slice())
    }
}

impl From<Vec<String>> for PermissionRequirement {
    fn from(tokens: Vec<String>) -> Self {
        PermissionRequirement {
            tokens: tokens.into_iter().map(Value::from).collect(),
        }
    }
}

impl From<Value> for PermissionRequirement {
    fn from(value: Value) -> Self {
        PermissionRequirement::from_value(value)
    }
}

impl<T: Into<PermissionRequirement>> From<Option<T>> for PermissionRequirement {
    fn from(requirement: Option<T>) -> Self {
        requirement.map(Into::into).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for PermissionRequirement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(PermissionRequirement::from_value)
    }
}
