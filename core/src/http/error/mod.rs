mod auth_error;
mod gate_error;

pub use auth_error::AuthError;
pub use gate_error::{GateError, PermissionFault, RegistrationError, ResolveError};
