//! Common helper functions for the permission macros.

use proc_macro2::TokenStream;
use quote::quote;

/// Path the generated code uses to reach the core crate.
///
/// Generated code goes through the `actix-permissions` facade, which
/// re-exports the core crate at its root.
pub fn core_crate_path() -> TokenStream {
    quote! { ::actix_permissions }
}
