//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise scalar primitives, `Vec<T>`, and wrapper types the walker cannot
//! fill.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Scalar types with a `ScalarLeaf` implementation.
const SCALARS: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64",
];

/// Path types that never bind, whatever their parameters.
const UNSUPPORTED: &[&str] = &[
    "Option",
    "HashMap",
    "BTreeMap",
    "HashSet",
    "BTreeSet",
    "VecDeque",
    "LinkedList",
    "Box",
    "Rc",
    "Arc",
    "Cell",
    "RefCell",
    "char",
    "str",
];

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// The final path segment of a plain (non-qualified) path type.
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    p.path.segments.last()
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// The check is shallow: it inspects only the outermost path, so
/// `std::vec::Vec<T>` and `Vec<T>` both match.
fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let last = last_segment(ty)?;
    if last.ident != wrapper {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

/// Extracts the element type `T` if `ty` is `Vec<T>`.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Vec")
}

/// Returns `true` for a known scalar primitive or `String`.
pub(crate) fn is_scalar(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|last| {
        matches!(last.arguments, PathArguments::None)
            && SCALARS.iter().any(|name| last.ident == name)
    })
}

/// Returns `true` for wrappers and containers the walker cannot fill.
pub(crate) fn is_unsupported_path(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|last| UNSUPPORTED.iter().any(|name| last.ident == name))
}

/// Render `ty` as compact source text, e.g. `Option<String>`.
pub(crate) fn render(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ' ' {
            out.push(c);
            continue;
        }
        let after_word = out.chars().last().is_some_and(|p| is_word(p) || p == ',');
        let before_word = chars.peek().is_some_and(|&n| is_word(n) || n == '\'');
        if after_word && before_word {
            out.push(' ');
        }
    }
    out
}

const fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
