//! Attaches credentials to incoming requests.
//!
//! This stage does not verify anything: it reads an identity that was
//! established upstream (a gateway header, a session, a closure of your
//! own) and stores it in the request extensions where the permission gate
//! picks it up.

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::http::permission::credentials::Credentials;
use crate::http::permission::extractor::CredentialsExt;

/// Extracts the principal's credentials from a request.
pub trait Authenticator {
    fn authenticate(&self, req: &ServiceRequest) -> Option<Credentials>;
}

impl<F> Authenticator for F
where
    F: Fn(&ServiceRequest) -> Option<Credentials>,
{
    fn authenticate(&self, req: &ServiceRequest) -> Option<Credentials> {
        self(req)
    }
}

/// Trusts a subject header set by an upstream proxy.
///
/// # Example
/// ```ignore
/// App::new().wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
/// ```
#[derive(Clone, Debug)]
pub struct HeaderAuthenticator {
    header: String,
}

impl HeaderAuthenticator {
    /// Reads the subject from the `x-user` header.
    pub fn new() -> Self {
        HeaderAuthenticator {
            header: "x-user".to_string(),
        }
    }

    pub fn header(mut self, name: &str) -> Self {
        self.header = name.to_string();
        self
    }
}

impl Default for HeaderAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for HeaderAuthenticator {
    fn authenticate(&self, req: &ServiceRequest) -> Option<Credentials> {
        let subject = req.headers().get(self.header.as_str())?.to_str().ok()?;
        if subject.is_empty() {
            return None;
        }
        Some(Credentials::new(subject))
    }
}

/// Middleware factory running an [`Authenticator`] on every request.
///
/// Requests without credentials pass through untouched; routes that
/// require permissions then resolve them for an anonymous principal.
pub struct CredentialsTransform<A> {
    authenticator: Rc<A>,
}

impl<A> CredentialsTransform<A> {
    pub fn new(authenticator: A) -> Self {
        CredentialsTransform {
            authenticator: Rc::new(authenticator),
        }
    }
}

impl<S, B, A> Transform<S, ServiceRequest> for CredentialsTransform<A>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    A: Authenticator + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CredentialsService<A, S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CredentialsService {
            authenticator: Rc::clone(&self.authenticator),
            service: Rc::new(service),
        })
    }
}

pub struct CredentialsService<A, S> {
    authenticator: Rc<A>,
    service: Rc<S>,
}

impl<A, S, B> Service<ServiceRequest> for CredentialsService<A, S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    A: Authenticator,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(credentials) = self.authenticator.authenticate(&req) {
            log::trace!("attached credentials for {}", credentials.subject());
            req.set_credentials(credentials);
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}
