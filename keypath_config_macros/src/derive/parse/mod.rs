//! Parsing utilities for the `Bind` derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

mod input;
mod literals;
mod role;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ParsedField, parse_input};
pub(crate) use role::Role;

use literals::lit_str;

/// Struct-level `#[bind(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[bind(crate = "my_alias")]`, generated code references
    /// types through `my_alias::` instead of `keypath_config::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Bind)]`.
///
/// - `key` overrides the lookup key.
/// - `tag` passes raw tag text to the path resolver.
/// - `skip` excludes the field from binding.
/// - `flatten` binds an embedded record under the parent's path.
/// - `nested` forces record treatment for a type the derive would otherwise
///   classify differently.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub key: Option<LitStr>,
    pub tag: Option<LitStr>,
    pub skip: bool,
    pub flatten: bool,
    pub nested: bool,
}

/// Iterate all `#[bind(...)]` attributes once and apply a callback.
fn parse_bind<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("bind")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown(meta: &ParseNestedMeta) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!("unknown bind attribute `{name}`"))
}

/// Extracts `#[bind(...)]` metadata applied to a struct.
///
/// Only `crate` is recognised; anything else is rejected.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_bind(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(unknown(meta))
        }
    })?;
    Ok(out)
}

fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    let Some(ident) = meta.path.get_ident() else {
        return Err(unknown(meta));
    };
    match ident.to_string().as_str() {
        "key" => out.key = Some(lit_str(meta, "key")?),
        "tag" => out.tag = Some(lit_str(meta, "tag")?),
        "skip" => out.skip = true,
        "flatten" => out.flatten = true,
        "nested" => out.nested = true,
        _ => return Err(unknown(meta)),
    }
    Ok(())
}

/// Parses field-level `#[bind(...)]` attributes and rejects contradictory
/// combinations.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_bind(&field.attrs, |meta| apply_field_attr(meta, &mut out))?;
    let conflict = if out.key.is_some() && out.tag.is_some() {
        Some("`key` and `tag` cannot be combined")
    } else if out.skip && (out.key.is_some() || out.tag.is_some() || out.flatten || out.nested) {
        Some("`skip` cannot be combined with other bind attributes")
    } else if out.flatten && (out.key.is_some() || out.tag.is_some()) {
        Some("flattened fields bind under the parent path and take no `key` or `tag`")
    } else if out.flatten && out.nested {
        Some("`flatten` and `nested` cannot be combined")
    } else {
        None
    };
    conflict.map_or(Ok(out), |message| {
        Err(syn::Error::new_spanned(field, message))
    })
}
