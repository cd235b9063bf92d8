//! The `#[permissions]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, ExprLit, ExprUnary, ItemFn, Lit, ReturnType, Token, UnOp};

use crate::helpers::core_crate_path;

/// Declared tokens, kept as expressions that convert into JSON values.
///
/// String literals are the normal case. Numbers and booleans are accepted
/// so that they fault at request time with "permission must be a string",
/// the same as a non-string token in a JSON route configuration.
pub struct Permissions {
    tokens: Vec<Expr>,
}

impl Parse for Permissions {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let args: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(input)?;

        let mut tokens = Vec::new();
        for arg in args {
            match &arg {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(_) | Lit::Int(_) | Lit::Float(_) | Lit::Bool(_),
                    ..
                }) => tokens.push(arg),
                Expr::Unary(ExprUnary {
                    op: UnOp::Neg(_),
                    expr,
                    ..
                }) if matches!(
                    expr.as_ref(),
                    Expr::Lit(ExprLit {
                        lit: Lit::Int(_) | Lit::Float(_),
                        ..
                    })
                ) =>
                {
                    tokens.push(arg)
                }
                // Constants like `#[permissions(CARS_READ)]`
                Expr::Path(_) => tokens.push(arg),
                _ => {
                    return Err(syn::Error::new_spanned(
                        arg,
                        r#"expected a permission like "cars:read" or a constant"#,
                    ));
                }
            }
        }

        Ok(Permissions { tokens })
    }
}

pub fn permissions_impl(attrs: TokenStream, input: TokenStream) -> TokenStream {
    let permissions = parse_macro_input!(attrs as Permissions);
    let item_fn = parse_macro_input!(input as ItemFn);

    match expand(permissions, item_fn) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(permissions: Permissions, item_fn: ItemFn) -> syn::Result<TokenStream2> {
    let sig = &item_fn.sig;
    if sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            sig.fn_token,
            "#[permissions] can only be applied to async handlers",
        ));
    }

    let attrs = &item_fn.attrs;
    let vis = &item_fn.vis;
    let block = &item_fn.block;
    let fn_name = &sig.ident;
    let inputs = &sig.inputs;
    let generics = &sig.generics;
    let where_clause = &generics.where_clause;

    let original_return = match &sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    };

    let core_path = core_crate_path();
    let values = permissions.tokens.iter().map(|token| {
        quote! { #core_path::__private::serde_json::Value::from(#token) }
    });

    Ok(quote! {
        #(#attrs)*
        #vis async fn #fn_name #generics(
            __permissions_req: ::actix_web::HttpRequest,
            #inputs
        ) -> ::std::result::Result<#original_return, #core_path::http::error::GateError>
        #where_clause
        {
            {
                let __requirement = #core_path::http::permission::PermissionRequirement::from_values(
                    ::std::vec![#(#values),*]
                );
                #core_path::http::permission::PermissionGate::authorize_request(
                    &__permissions_req,
                    &__requirement,
                )
                .await?;
            }

            ::std::result::Result::Ok(async move #block.await)
        }
    })
}
