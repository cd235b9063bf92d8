//! The permission gate and its registration.

use std::sync::Arc;

use actix_web::HttpRequest;

use crate::http::error::{GateError, RegistrationError};
use crate::http::permission::config::GateConfig;
use crate::http::permission::credentials::Credentials;
use crate::http::permission::decision::{evaluate, Decision};
use crate::http::permission::extractor::CredentialsExt;
use crate::http::permission::middleware::RequirePermissions;
use crate::http::permission::requirement::PermissionRequirement;
use crate::http::permission::resolver::PermissionResolver;

/// Checks route requirements against the maps returned by a resolver.
///
/// Cheap to clone; build it once and move it into `HttpServer::new`.
///
/// # Example
/// ```ignore
/// let gate = PermissionGate::builder()
///     .resolver(StaticPermissionResolver::new(map))
///     .config(GateConfig::new().realm("fleet"))
///     .build()?;
///
/// HttpServer::new(move || {
///     App::new()
///         .app_data(gate.clone())
///         .service(
///             web::resource("/cars")
///                 .wrap(gate.require("cars:read"))
///                 .route(web::get().to(list_cars)),
///         )
/// })
/// ```
#[derive(Clone)]
pub struct PermissionGate {
    resolver: Arc<dyn PermissionResolver>,
    config: Arc<GateConfig>,
}

impl PermissionGate {
    /// Creates a gate with the default configuration.
    pub fn new<R: PermissionResolver + 'static>(resolver: R) -> Self {
        PermissionGate {
            resolver: Arc::new(resolver),
            config: Arc::new(GateConfig::default()),
        }
    }

    pub fn builder() -> GateBuilder {
        GateBuilder::new()
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Middleware enforcing `requirement` on the wrapped resource or scope.
    pub fn require(&self, requirement: impl Into<PermissionRequirement>) -> RequirePermissions {
        RequirePermissions::new(self.clone(), requirement.into())
    }

    /// Resolves the principal's permissions and evaluates `requirement`.
    ///
    /// Unrestricted requirements allow without calling the resolver.
    /// `route` is only used for logging.
    pub async fn check(
        &self,
        requirement: &PermissionRequirement,
        credentials: Option<&Credentials>,
        route: &str,
    ) -> Result<Decision, GateError> {
        if requirement.is_unrestricted() {
            log::debug!("{}: no permissions required", route);
            return Ok(Decision::Allow);
        }

        let permissions = self.resolver.resolve(credentials).await.map_err(|e| {
            log::error!("{}: {}", route, e);
            GateError::from(e)
        })?;

        let decision = evaluate(requirement, &permissions).map_err(|fault| {
            log::error!("{}: {}", route, fault);
            GateError::from(fault)
        })?;

        match &decision {
            Decision::Allow => log::debug!("{}: permission granted", route),
            Decision::Deny { token } => log::warn!(
                "{}: {} denied for {}",
                route,
                token,
                credentials.map(Credentials::subject).unwrap_or("anonymous")
            ),
        }

        Ok(decision)
    }

    /// Like [`check`](Self::check) but turns a deny into
    /// [`GateError::Unauthorized`].
    pub async fn authorize(
        &self,
        requirement: &PermissionRequirement,
        credentials: Option<&Credentials>,
        route: &str,
    ) -> Result<(), GateError> {
        match self.check(requirement, credentials, route).await? {
            Decision::Allow => Ok(()),
            Decision::Deny { .. } => Err(self.unauthorized()),
        }
    }

    /// Authorizes a handler's request against the gate in the app data.
    ///
    /// Used by the `#[permissions]` macro.
    pub async fn authorize_request(
        req: &HttpRequest,
        requirement: &PermissionRequirement,
    ) -> Result<(), GateError> {
        let gate = req
            .app_data::<PermissionGate>()
            .cloned()
            .ok_or_else(|| {
                log::error!("{}: permission gate is not registered", req.path());
                GateError::NotRegistered
            })?;
        let credentials = req.credentials();
        gate.authorize(requirement, credentials.as_ref(), req.path())
            .await
    }

    pub(crate) fn unauthorized(&self) -> GateError {
        GateError::Unauthorized {
            message: self.config.get_deny_message().to_string(),
            realm: self.config.get_realm().map(str::to_string),
        }
    }
}

/// Registration-time builder for [`PermissionGate`].
///
/// [`build`](Self::build) fails when no resolver was given, so a gate
/// can never silently let everything through.
#[derive(Default)]
pub struct GateBuilder {
    resolver: Option<Arc<dyn PermissionResolver>>,
    config: GateConfig,
}

impl GateBuilder {
    pub fn new() -> Self {
        GateBuilder {
            resolver: None,
            config: GateConfig::default(),
        }
    }

    pub fn resolver<R: PermissionResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Shares an existing resolver between several gates.
    pub fn resolver_arc(mut self, resolver: Arc<dyn PermissionResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<PermissionGate, RegistrationError> {
        let resolver = self.resolver.ok_or_else(|| {
            log::error!("permission gate registration failed: no resolver");
            RegistrationError::MissingResolver
        })?;

        log::info!("permission gate registered");
        Ok(PermissionGate {
            resolver,
            config: Arc::new(self.config),
        })
    }
}
