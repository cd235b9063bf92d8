//! Route-level permission middleware.

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{Error, ResponseError};
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::http::permission::decision::Decision;
use crate::http::permission::extractor::CredentialsExt;
use crate::http::permission::gate::PermissionGate;
use crate::http::permission::requirement::PermissionRequirement;

/// Middleware factory enforcing one route's requirement.
///
/// Created with [`PermissionGate::require`].
///
/// - allow: the request reaches the handler, its response is untouched
/// - deny: `401 Unauthorized`, the handler never runs
/// - malformed requirement or failing resolver: the service returns an
///   `Error`, the handler never runs
///
/// # Example
/// ```ignore
/// web::resource("/cars")
///     .wrap(gate.require(["cars:read", "drivers:read"]))
///     .route(web::get().to(list_cars))
/// ```
pub struct RequirePermissions {
    gate: PermissionGate,
    requirement: Rc<PermissionRequirement>,
}

impl RequirePermissions {
    pub fn new(gate: PermissionGate, requirement: PermissionRequirement) -> Self {
        RequirePermissions {
            gate,
            requirement: Rc::new(requirement),
        }
    }

    pub fn requirement(&self) -> &PermissionRequirement {
        &self.requirement
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermissions
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequirePermissionsService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequirePermissionsService {
            gate: self.gate.clone(),
            requirement: Rc::clone(&self.requirement),
            service: Rc::new(service),
        })
    }
}

pub struct RequirePermissionsService<S> {
    gate: PermissionGate,
    requirement: Rc<PermissionRequirement>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = self.gate.clone();
        let requirement = Rc::clone(&self.requirement);

        Box::pin(async move {
            let credentials = req.credentials();
            let route = req.path().to_string();

            match gate.check(&requirement, credentials.as_ref(), &route).await? {
                Decision::Allow => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Decision::Deny { .. } => {
                    let response = gate.unauthorized().error_response();
                    Ok(req.into_response(response.map_into_right_body()))
                }
            }
        })
    }
}
