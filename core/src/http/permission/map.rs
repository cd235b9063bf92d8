//! The principal's permission table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Granted capabilities, keyed by resource then action.
///
/// Serializes as a plain nested object:
/// `{"cars": {"read": true, "create": false}}`.
///
/// # Example
/// ```
/// use actix_permissions_core::http::permission::PermissionMap;
///
/// let map = PermissionMap::new()
///     .with("cars", "read", true)
///     .with("cars", "create", false);
///
/// assert!(map.is_granted("cars", "read"));
/// assert!(!map.is_granted("cars", "create"));
/// assert!(!map.is_granted("drivers", "read"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMap {
    resources: HashMap<String, HashMap<String, bool>>,
}

impl PermissionMap {
    pub fn new() -> Self {
        PermissionMap {
            resources: HashMap::new(),
        }
    }

    /// Parses a map from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets `resource:action` to `granted` (builder pattern).
    pub fn with(mut self, resource: &str, action: &str, granted: bool) -> Self {
        self.set(resource, action, granted);
        self
    }

    pub fn grant(&mut self, resource: &str, action: &str) {
        self.set(resource, action, true);
    }

    /// Records an explicit `false` for `resource:action`.
    pub fn deny(&mut self, resource: &str, action: &str) {
        self.set(resource, action, false);
    }

    fn set(&mut self, resource: &str, action: &str, granted: bool) {
        self.resources
            .entry(resource.to_string())
            .or_default()
            .insert(action.to_string(), granted);
    }

    /// A missing resource or action counts as not granted.
    pub fn is_granted(&self, resource: &str, action: &str) -> bool {
        self.resources
            .get(resource)
            .and_then(|actions| actions.get(action))
            .copied()
            .unwrap_or(false)
    }

    pub fn actions(&self, resource: &str) -> Option<&HashMap<String, bool>> {
        self.resources.get(resource)
    }

    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl From<HashMap<String, HashMap<String, bool>>> for PermissionMap {
    fn from(resources: HashMap<String, HashMap<String, bool>>) -> Self {
        PermissionMap { resources }
    }
}
