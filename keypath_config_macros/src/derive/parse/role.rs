//! Field role inference from declared types.

use syn::Type;

use super::FieldAttrs;
use super::type_utils::{is_scalar, is_unsupported_path, render, vec_inner};

/// How generated code describes a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// A scalar leaf; carries the field type for its `ScalarLeaf::KIND`.
    Scalar(Type),
    /// A `Vec` leaf; carries the element type.
    List(Type),
    /// A nested record bound under its own key.
    Record,
    /// An embedded record bound under the parent's path.
    Flatten,
    /// A type outside the supported set, rendered as declared.
    Unsupported(String),
}

/// Classify a field from its attributes and declared type.
pub(crate) fn infer(ty: &Type, attrs: &FieldAttrs) -> Role {
    if attrs.flatten {
        return Role::Flatten;
    }
    if attrs.nested {
        return Role::Record;
    }
    classify(ty)
}

fn classify(ty: &Type) -> Role {
    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Path(_) => {
            if let Some(element) = vec_inner(ty) {
                return if is_scalar(element) {
                    Role::List(element.clone())
                } else {
                    Role::Unsupported(render(ty))
                };
            }
            if is_scalar(ty) {
                Role::Scalar(ty.clone())
            } else if is_unsupported_path(ty) {
                Role::Unsupported(render(ty))
            } else {
                Role::Record
            }
        }
        _ => Role::Unsupported(render(ty)),
    }
}
