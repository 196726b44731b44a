//! Procedural macros for `keypath_config`.
//!
//! `#[derive(Bind)]` lets a struct with named fields describe itself to the
//! binding walker. Each field is classified from its declared type: known
//! scalars and `Vec`s of them become leaves, other named types become nested
//! records, and types the walker cannot fill (such as `Option<T>`, maps, or
//! tuples) are recorded as unsupported so the walker reports them instead of
//! failing to compile.
//!
//! Any other path type is taken to be a record and must implement `Bind`
//! itself. Standard types such as `PathBuf`, `Duration`, or `IpAddr` do not,
//! so a field of one of those types fails to compile unless it is marked
//! `#[bind(skip)]`.
//!
//! Field attributes:
//!
//! - `#[bind(key = "name")]` looks the field up under `name`.
//! - `#[bind(tag = "val=name")]` carries a raw tag interpreted by the path
//!   resolver's syntax.
//! - `#[bind(skip)]` excludes the field.
//! - `#[bind(flatten)]` binds an embedded record's fields as if they were
//!   declared on the parent.
//! - `#[bind(nested)]` forces record treatment.
//!
//! The struct attribute `#[bind(crate = "path")]` points generated code at a
//! renamed dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `keypath_config::Bind`.
#[proc_macro_derive(Bind, attributes(bind))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
