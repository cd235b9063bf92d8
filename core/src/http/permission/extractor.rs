//! Extractors for reading the attached credentials in handlers.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::{Payload, ServiceRequest};
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::error::AuthError;
use crate::http::permission::credentials::Credentials;

/// Extractor for the credentials of the current request.
///
/// # Usage
/// ```ignore
/// use actix_permissions_core::http::permission::Authenticated;
///
/// async fn handler(who: Authenticated) -> impl Responder {
///     format!("Hello, {}!", who.subject())
/// }
/// ```
///
/// # Errors
/// Returns `401 Unauthorized` if no credentials were attached.
#[derive(Debug, Clone)]
pub struct Authenticated(Credentials);

impl Authenticated {
    pub fn into_inner(self) -> Credentials {
        self.0
    }
}

impl Deref for Authenticated {
    type Target = Credentials;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Authenticated {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.credentials() {
            Some(credentials) => ready(Ok(Authenticated(credentials))),
            None => ready(Err(AuthError::Unauthorized)),
        }
    }
}

/// Extension trait giving access to the attached credentials.
pub trait CredentialsExt {
    /// Returns a clone of the credentials if present.
    fn credentials(&self) -> Option<Credentials>;

    /// Attaches credentials, replacing any previous ones.
    fn set_credentials(&self, credentials: Credentials);
}

impl CredentialsExt for HttpRequest {
    fn credentials(&self) -> Option<Credentials> {
        self.extensions().get::<Credentials>().cloned()
    }

    fn set_credentials(&self, credentials: Credentials) {
        self.extensions_mut().insert(credentials);
    }
}

impl CredentialsExt for ServiceRequest {
    fn credentials(&self) -> Option<Credentials> {
        self.extensions().get::<Credentials>().cloned()
    }

    fn set_credentials(&self, credentials: Credentials) {
        self.extensions_mut().insert(credentials);
    }
}
