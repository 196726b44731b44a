//! Input parsing for the `Bind` derive macro.
//!
//! This module gathers the fields, their attributes, and their inferred roles
//! in one pass so macro expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, Role, StructAttrs, parse_field_attrs, parse_struct_attrs, role};

/// One named field ready for code generation.
pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    /// Declared name with any raw-identifier prefix removed.
    pub name: String,
    pub attrs: FieldAttrs,
    pub role: Role,
}

/// Everything expansion needs from the user's struct.
pub(crate) struct ParsedInput {
    pub struct_attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Gathers information from the user-provided struct.
///
/// Only structs with named fields are accepted.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Bind requires named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Bind can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Bind requires named fields"));
        };
        let attrs = parse_field_attrs(field)?;
        let role = role::infer(&field.ty, &attrs);
        fields.push(ParsedField {
            name: ident.unraw().to_string(),
            ident,
            attrs,
            role,
        });
    }
    Ok(ParsedInput {
        struct_attrs,
        fields,
    })
}
