//! Route-level permission checks for Actix Web.
//!
//! See [`http::permission`] for the gate, the resolver trait and the
//! middleware, and [`http::error`] for the error types.

pub mod http;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
