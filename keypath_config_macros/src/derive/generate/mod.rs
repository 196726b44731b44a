//! Code generation for the `Bind` implementation.
//!
//! The generated `shape` returns a static descriptor table in declaration
//! order; `field_mut` maps each bindable index to the matching field.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::DeriveInput;

use super::parse::{FieldAttrs, ParsedField, Role};

#[cfg(test)]
mod tests;

/// Emit `impl Bind for <input>`.
pub(crate) fn bind_impl(
    input: &DeriveInput,
    fields: &[ParsedField],
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let descriptors = fields.iter().map(|field| descriptor(field, krate));
    let arms = fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| accessor_arm(index, field));

    quote! {
        impl #impl_generics #krate::Bind for #ident #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape {
                static FIELDS: &[#krate::FieldDescriptor] = &[ #( #descriptors ),* ];
                #krate::Shape::Record(FIELDS)
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #krate::Bind> {
                match index {
                    #( #arms )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Constant expression building the field's `FieldDescriptor`.
fn descriptor(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let base = match &field.role {
        Role::Scalar(ty) => quote! {
            #krate::FieldDescriptor::leaf(
                #name,
                #krate::ValueKind::Scalar(<#ty as #krate::ScalarLeaf>::KIND),
            )
        },
        Role::List(element) => quote! {
            #krate::FieldDescriptor::leaf(
                #name,
                #krate::ValueKind::List(<#element as #krate::ScalarLeaf>::KIND),
            )
        },
        Role::Unsupported(rendered) => quote! {
            #krate::FieldDescriptor::leaf(#name, #krate::ValueKind::Unsupported(#rendered))
        },
        Role::Record => quote! { #krate::FieldDescriptor::record(#name) },
        Role::Flatten => quote! { #krate::FieldDescriptor::flatten(#name) },
    };
    let Some(extra) = annotation(&field.attrs, krate) else {
        return base;
    };
    quote! { #base.with_annotation(#extra) }
}

fn annotation(attrs: &FieldAttrs, krate: &TokenStream) -> Option<TokenStream> {
    if attrs.skip {
        return Some(quote! { #krate::FieldAnnotation::Skip });
    }
    if let Some(key) = &attrs.key {
        return Some(quote! { #krate::FieldAnnotation::Key(#key) });
    }
    attrs
        .tag
        .as_ref()
        .map(|tag| quote! { #krate::FieldAnnotation::Tag(#tag) })
}

/// Match arm exposing the field, or `None` when the walker never needs it.
fn accessor_arm(index: usize, field: &ParsedField) -> Option<TokenStream> {
    if field.attrs.skip || matches!(field.role, Role::Unsupported(_)) {
        return None;
    }
    let ident = &field.ident;
    let index = Literal::usize_unsuffixed(index);
    Some(quote! {
        #index => ::core::option::Option::Some(&mut self.#ident),
    })
}
