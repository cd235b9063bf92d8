//! Route-level permission checks.
//!
//! # Module Structure
//!
//! - `token` - `resource:action` tokens
//! - `requirement` - what a route declares (single token or list)
//! - `map` - the principal's `resource -> action -> bool` table
//! - `decision` - allow/deny evaluation
//! - `resolver` - `PermissionResolver` trait and the provided resolvers
//! - `credentials` - the principal handed to the resolver
//! - `authenticator` - middleware attaching credentials to requests
//! - `extractor` - `Authenticated` extractor and `CredentialsExt`
//! - `config` - `GateConfig`
//! - `gate` - `PermissionGate` and its builder
//! - `middleware` - `RequirePermissions`, the per-route middleware
//!
//! # Example
//! ```ignore
//! use actix_web::{web, App, HttpServer};
//! use actix_permissions_core::http::permission::{
//!     CredentialsTransform, HeaderAuthenticator, PermissionGate, PermissionMap,
//!     StaticPermissionResolver,
//! };
//!
//! let permissions = PermissionMap::new()
//!     .with("cars", "read", true)
//!     .with("cars", "create", false);
//!
//! let gate = PermissionGate::builder()
//!     .resolver(StaticPermissionResolver::new(permissions))
//!     .build()?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
//!         .service(
//!             web::resource("/cars")
//!                 .wrap(gate.require("cars:read"))
//!                 .route(web::get().to(list_cars)),
//!         )
//! })
//! ```

pub use authenticator::{Authenticator, CredentialsTransform, HeaderAuthenticator};
pub use config::GateConfig;
pub use credentials::Credentials;
pub use decision::{evaluate, Decision};
pub use extractor::{Authenticated, CredentialsExt};
pub use gate::{GateBuilder, PermissionGate};
pub use map::PermissionMap;
pub use middleware::RequirePermissions;
pub use requirement::PermissionRequirement;
pub use resolver::{
    resolver_fn, FnResolver, InMemoryPermissionResolver, PermissionResolver,
    StaticPermissionResolver,
};
pub use token::PermissionToken;

mod credentials;
mod extractor;
mod token;

pub mod authenticator;
pub mod config;
pub mod decision;
pub mod gate;
pub mod map;
pub mod middleware;
pub mod requirement;
pub mod resolver;
