//! Procedural macros for declaring route permissions.
//!
//! # Usage
//!
//! ```ignore
//! use actix_permissions_codegen::permissions;
//! use actix_web::{get, HttpResponse, Responder};
//!
//! // One permission
//! #[permissions("cars:read")]
//! #[get("/cars")]
//! async fn list_cars() -> impl Responder {
//!     HttpResponse::Ok().body("cars")
//! }
//!
//! // Several permissions (AND logic - all of them are required)
//! #[permissions("cars:read", "drivers:read")]
//! #[get("/assignments")]
//! async fn assignments() -> impl Responder {
//!     HttpResponse::Ok().body("assignments")
//! }
//! ```
//!
//! The gate must be registered as app data:
//! `App::new().app_data(gate.clone())`.

use proc_macro::TokenStream;

mod helpers;
mod permissions;

/// Route permission annotation.
///
/// Checks every listed `resource:action` token against the permission map
/// resolved for the current request before the handler body runs.
///
/// # Usage
/// ```ignore
/// #[permissions("cars:create")]
/// #[post("/cars")]
/// async fn create_car(body: web::Json<NewCar>) -> impl Responder {
///     HttpResponse::Created().finish()
/// }
///
/// // Constants work too
/// const DRIVERS_DELETE: &str = "drivers:delete";
///
/// #[permissions(DRIVERS_DELETE)]
/// #[delete("/drivers/{id}")]
/// async fn delete_driver(id: web::Path<u32>) -> impl Responder {
///     HttpResponse::NoContent().finish()
/// }
/// ```
///
/// # Responses
/// - missing permission: `401 Unauthorized`
/// - malformed token (e.g. `"carsread"` or `12345`): `500` with the fault message
/// - no gate in the app data: `500`
///
/// An empty list, `#[permissions()]`, places no restriction.
#[proc_macro_attribute]
pub fn permissions(attrs: TokenStream, input: TokenStream) -> TokenStream {
    permissions::permissions_impl(attrs, input)
}
