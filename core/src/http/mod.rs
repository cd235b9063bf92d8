pub mod error;
pub mod permission;
