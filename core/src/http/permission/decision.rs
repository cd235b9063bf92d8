//! Allow/deny evaluation of a requirement against a permission map.

use crate::http::error::PermissionFault;
use crate::http::permission::map::PermissionMap;
use crate::http::permission::requirement::PermissionRequirement;
use crate::http::permission::token::PermissionToken;

/// Outcome of a well-formed requirement.
///
/// Malformed requirements never produce a `Decision`; they fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// `token` is the first required permission that was not granted.
    Deny { token: PermissionToken },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Evaluates `requirement` against `permissions`.
///
/// Every token is parsed before any lookup, so a misconfigured route
/// faults even when an earlier token would already deny.
///
/// # Example
/// ```
/// use actix_permissions_core::http::permission::{evaluate, PermissionMap, PermissionRequirement};
///
/// let map = PermissionMap::new().with("cars", "read", true);
///
/// assert!(evaluate(&PermissionRequirement::from("cars:read"), &map).unwrap().is_allowed());
/// assert!(!evaluate(&PermissionRequirement::from("cars:edit"), &map).unwrap().is_allowed());
/// assert!(evaluate(&PermissionRequirement::from("carsread"), &map).is_err());
/// ```
pub fn evaluate(
    requirement: &PermissionRequirement,
    permissions: &PermissionMap,
) -> Result<Decision, PermissionFault> {
    let tokens = requirement.parse()?;

    match tokens
        .into_iter()
        .find(|t| !permissions.is_granted(t.resource(), t.action()))
    {
        Some(token) => Ok(Decision::Deny { token }),
        None => Ok(Decision::Allow),
    }
}
