//! # Actix Permissions
//!
//! Route-level `resource:action` permission checks for Actix Web.
//!
//! This crate provides a unified API combining:
//! - `actix-permissions-core`: permission gate, resolvers and middleware
//! - `actix-permissions-codegen`: the `#[permissions]` attribute macro
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! actix-web = "4"
//! actix-permissions = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use actix_web::{get, web, App, HttpServer, HttpResponse, Responder};
//! use actix_permissions::permissions;
//! use actix_permissions::prelude::*;
//!
//! #[permissions("cars:read", "drivers:read")]
//! #[get("/assignments")]
//! async fn assignments() -> impl Responder {
//!     HttpResponse::Ok().body("assignments")
//! }
//!
//! async fn list_cars() -> impl Responder {
//!     HttpResponse::Ok().body("cars")
//! }
//!
//! let gate = PermissionGate::builder()
//!     .resolver(StaticPermissionResolver::from_json(r#"{"cars":{"read":true}}"#)?)
//!     .build()?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(gate.clone())
//!         .wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
//!         .service(assignments)
//!         .service(
//!             web::resource("/cars")
//!                 .wrap(gate.require("cars:read"))
//!                 .route(web::get().to(list_cars)),
//!         )
//! })
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `macros` | Yes | The `#[permissions]` attribute macro |

// Re-export everything from actix-permissions-core
pub use actix_permissions_core::*;

#[cfg(feature = "macros")]
pub use actix_permissions_codegen::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use actix_permissions_core::http::error::{GateError, PermissionFault, ResolveError};
    pub use actix_permissions_core::http::permission::{
        resolver_fn, Authenticated, Authenticator, Credentials, CredentialsExt,
        CredentialsTransform, Decision, GateConfig, HeaderAuthenticator,
        InMemoryPermissionResolver, PermissionGate, PermissionMap, PermissionRequirement,
        PermissionResolver, StaticPermissionResolver,
    };

    #[cfg(feature = "macros")]
    pub use actix_permissions_codegen::permissions;
}
