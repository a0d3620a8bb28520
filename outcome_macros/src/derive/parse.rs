//! Input validation and attribute parsing for the `Sentinel` derive.

use heck::ToSnakeCase;
use syn::{Data, DeriveInput, Fields, Lit, LitStr};

/// Rejects every input shape except a unit struct.
pub(crate) fn require_unit_struct(input: &DeriveInput) -> syn::Result<()> {
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => Ok(()),
        Data::Struct(data) => Err(syn::Error::new_spanned(
            &data.fields,
            "Sentinel requires a unit struct; a sentinel fault carries no payload",
        )),
        Data::Enum(data) => Err(syn::Error::new_spanned(
            data.enum_token,
            "Sentinel cannot be derived for enums; wrap enumerated codes in `Code` instead",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Sentinel cannot be derived for unions",
        )),
    }
}

/// Resolves the failure message: the `#[sentinel(message = "...")]`
/// attribute when present, otherwise the type name lowercased into words.
pub(crate) fn sentinel_message(input: &DeriveInput) -> syn::Result<String> {
    let mut explicit: Option<LitStr> = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("sentinel") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("message") {
                return Err(meta.error("unsupported sentinel attribute; expected `message`"));
            }
            if explicit.is_some() {
                return Err(meta.error("duplicate `message` attribute"));
            }
            explicit = Some(lit_str(&meta, "message")?);
            Ok(())
        })?;
    }
    Ok(explicit.map_or_else(|| default_message(&input.ident.to_string()), |lit| lit.value()))
}

/// Derives the default message from a type name: `StaleHandle` becomes
/// `"stale handle"`.
pub(crate) fn default_message(ident: &str) -> String {
    ident.to_snake_case().replace('_', " ")
}

/// Parses a string literal from a derive attribute.
fn lit_str(meta: &syn::meta::ParseNestedMeta<'_>, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(lit) => Ok(lit),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}
