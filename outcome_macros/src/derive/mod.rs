//! Expansion logic for the `Sentinel` derive.

mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Expands the derive input into `Fault` and `Sentinel` impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    parse::require_unit_struct(input)?;
    let message = parse::sentinel_message(input)?;
    let ident = &input.ident;
    Ok(quote! {
        impl ::outcome::Fault for #ident {
            fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::outcome::Sentinel>::MESSAGE)
            }
        }

        impl ::outcome::Sentinel for #ident {
            const MESSAGE: &'static str = #message;

            fn instance() -> Self {
                Self
            }
        }
    })
}
