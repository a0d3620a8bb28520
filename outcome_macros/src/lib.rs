//! Procedural macros for `outcome`.
//!
//! Provides the [`Sentinel`] derive, which implements the `outcome::Fault`
//! and `outcome::Sentinel` traits for a unit struct. The failure message is
//! taken from the `#[sentinel(message = "...")]` attribute, or derived from
//! the type name when the attribute is omitted.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `outcome::Sentinel`.
///
/// Accepts unit structs only; a sentinel fault carries no payload. The
/// optional `#[sentinel(message = "...")]` attribute fixes the rendered
/// failure message; without it the message is the type name lowercased into
/// words (`StaleHandle` becomes `"stale handle"`).
///
/// ```rust,ignore
/// use outcome::{Outcome, Sentinel};
///
/// #[derive(Debug, PartialEq, Eq, Sentinel)]
/// #[sentinel(message = "upstream unreachable")]
/// struct UpstreamUnreachable;
///
/// let ping: Outcome<u32, UpstreamUnreachable> = Outcome::fault();
/// assert_eq!(ping.to_string(), "upstream unreachable");
/// ```
#[proc_macro_derive(Sentinel, attributes(sentinel))]
pub fn derive_sentinel(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
