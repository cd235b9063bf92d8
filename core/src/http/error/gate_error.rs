//! Errors raised by the permission gate.
//!
//! Three outcomes are kept apart: a deny ([`GateError::Unauthorized`], 401),
//! a route misconfiguration ([`PermissionFault`], 500) and a failing
//! resolver ([`ResolveError`], 500).

use actix_web::{http, http::StatusCode, HttpResponse, ResponseError};
use derive_more::{Display, Error};
use serde_json::json;

/// A route declared a permission that cannot be parsed.
///
/// This is a programming mistake in route setup, never a deny.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PermissionFault {
    /// The raw token is not a string (e.g. `12345`).
    #[display("permission must be a string")]
    NotAString,

    /// The token does not split into exactly two non-empty parts on `:`.
    #[display("permission must be formatted: [routeName]:[read|create|edit|delete]")]
    Malformed,
}

impl ResponseError for PermissionFault {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), &self.to_string())
    }
}

/// The permission resolver could not produce a map.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("permission resolver failed: {message}")]
pub struct ResolveError {
    message: String,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        ResolveError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The gate could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistrationError {
    #[display("permission resolver is required")]
    MissingResolver,
}

/// Request-time outcome of the gate other than "allow".
#[derive(Debug, Display, Error)]
pub enum GateError {
    /// A required permission is missing from the principal's map.
    #[display("{message}")]
    Unauthorized {
        message: String,
        realm: Option<String>,
    },

    /// The route's requirement is malformed.
    #[display("{_0}")]
    Fault(PermissionFault),

    /// The resolver failed.
    #[display("{_0}")]
    Resolver(ResolveError),

    /// A `#[permissions]` handler ran without a gate in the app data.
    #[display("permission gate is not registered")]
    NotRegistered,
}

impl From<PermissionFault> for GateError {
    fn from(fault: PermissionFault) -> Self {
        GateError::Fault(fault)
    }
}

impl From<ResolveError> for GateError {
    fn from(err: ResolveError) -> Self {
        GateError::Resolver(err)
    }
}

impl ResponseError for GateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GateError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            GateError::Fault(_) | GateError::Resolver(_) | GateError::NotRegistered => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = json_error(self.status_code(), &self.to_string());
        if let GateError::Unauthorized {
            realm: Some(realm), ..
        } = self
        {
            if let Ok(value) =
                http::header::HeaderValue::from_str(&format!("Bearer realm={}", quoted(realm)))
            {
                response
                    .headers_mut()
                    .insert(http::header::WWW_AUTHENTICATE, value);
            }
        }
        response
    }
}

/// Quoted-string form of a challenge parameter.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn json_error(status: StatusCode, message: &str) -> HttpResponse {
    let error = status.canonical_reason().unwrap_or("Error");
    HttpResponse::build(status).json(json!({
        "statusCode": status.as_u16(),
        "error": error,
        "message": message,
    }))
}
