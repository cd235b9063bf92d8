//! Permission resolvers.
//!
//! A resolver turns the current principal's credentials into a fresh
//! [`PermissionMap`] on every request. The gate never caches the result.
//!
//! # Example
//! ```rust,ignore
//! use actix_permissions_core::http::permission::{Credentials, PermissionMap, PermissionResolver};
//! use actix_permissions_core::http::error::ResolveError;
//! use async_trait::async_trait;
//!
//! struct RoleTableResolver {
//!     pool: PgPool,
//! }
//!
//! #[async_trait]
//! impl PermissionResolver for RoleTableResolver {
//!     async fn resolve(&self, credentials: Option<&Credentials>) -> Result<PermissionMap, ResolveError> {
//!         let Some(credentials) = credentials else {
//!             return Ok(PermissionMap::new());
//!         };
//!         load_permissions(&self.pool, credentials.subject())
//!             .await
//!             .map_err(|e| ResolveError::new(e.to_string()))
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;

use crate::http::error::ResolveError;
use crate::http::permission::credentials::Credentials;
use crate::http::permission::map::PermissionMap;

/// Supplies the permission map for the principal of a request.
#[async_trait]
pub trait PermissionResolver: Send + Sync {
    /// `credentials` is `None` for requests nobody authenticated.
    async fn resolve(&self, credentials: Option<&Credentials>)
        -> Result<PermissionMap, ResolveError>;
}

// =============================================================================
// Static Resolver
// =============================================================================

/// Returns the same map for every principal.
#[derive(Clone, Debug, Default)]
pub struct StaticPermissionResolver {
    permissions: PermissionMap,
}

impl StaticPermissionResolver {
    pub fn new(permissions: PermissionMap) -> Self {
        StaticPermissionResolver { permissions }
    }

    /// Loads the map from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        PermissionMap::from_json(json).map(Self::new)
    }
}

#[async_trait]
impl PermissionResolver for StaticPermissionResolver {
    async fn resolve(&self, _: Option<&Credentials>) -> Result<PermissionMap, ResolveError> {
        Ok(self.permissions.clone())
    }
}

// =============================================================================
// In-Memory Resolver
// =============================================================================

/// Permission maps keyed by credential subject.
///
/// Anonymous requests and unknown subjects get the fallback map, which is
/// empty unless configured.
///
/// # Example
/// ```
/// use actix_permissions_core::http::permission::{InMemoryPermissionResolver, PermissionMap};
///
/// let resolver = InMemoryPermissionResolver::new()
///     .with_subject("alice", PermissionMap::new().with("cars", "read", true))
///     .fallback(PermissionMap::new().with("cars", "list", true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryPermissionResolver {
    subjects: HashMap<String, PermissionMap>,
    fallback: PermissionMap,
}

impl InMemoryPermissionResolver {
    pub fn new() -> Self {
        InMemoryPermissionResolver {
            subjects: HashMap::new(),
            fallback: PermissionMap::new(),
        }
    }

    /// Registers the map of one subject.
    pub fn with_subject(mut self, subject: &str, permissions: PermissionMap) -> Self {
        use std::collections::hash_map::Entry;
        match self.subjects.entry(subject.to_string()) {
            Entry::Occupied(e) => {
                log::warn!("permissions for {} already registered, skipping", e.key());
            }
            Entry::Vacant(e) => {
                e.insert(permissions);
            }
        }
        self
    }

    /// Map used when no subject matches.
    pub fn fallback(mut self, permissions: PermissionMap) -> Self {
        self.fallback = permissions;
        self
    }

    fn lookup(&self, credentials: Option<&Credentials>) -> &PermissionMap {
        credentials
            .and_then(|c| self.subjects.get(c.subject()))
            .unwrap_or(&self.fallback)
    }
}

#[async_trait]
impl PermissionResolver for InMemoryPermissionResolver {
    async fn resolve(
        &self,
        credentials: Option<&Credentials>,
    ) -> Result<PermissionMap, ResolveError> {
        Ok(self.lookup(credentials).clone())
    }
}

// =============================================================================
// Closure Resolver
// =============================================================================

/// Adapts an async closure into a [`PermissionResolver`].
///
/// See [`resolver_fn`].
pub struct FnResolver<F> {
    f: F,
}

/// Wraps `f` as a resolver.
///
/// # Example
/// ```
/// use actix_permissions_core::http::error::ResolveError;
/// use actix_permissions_core::http::permission::{resolver_fn, Credentials, PermissionMap};
///
/// let resolver = resolver_fn(|credentials: Option<Credentials>| async move {
///     let mut map = PermissionMap::new();
///     if credentials.is_some() {
///         map.grant("cars", "read");
///     }
///     Ok::<_, ResolveError>(map)
/// });
/// ```
pub fn resolver_fn<F, Fut>(f: F) -> FnResolver<F>
where
    F: Fn(Option<Credentials>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PermissionMap, ResolveError>> + Send,
{
    FnResolver { f }
}

#[async_trait]
impl<F, Fut> PermissionResolver for FnResolver<F>
where
    F: Fn(Option<Credentials>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PermissionMap, ResolveError>> + Send,
{
    async fn resolve(
        &self,
        credentials: Option<&Credentials>,
    ) -> Result<PermissionMap, ResolveError> {
        (self.f)(credentials.cloned()).await
    }
}
