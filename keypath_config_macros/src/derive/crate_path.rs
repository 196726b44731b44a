//! Path to the runtime crate used in generated code.
//!
//! Generated impls name `Bind`, `Shape` and friends through this path, so a
//! struct can derive `Bind` from a crate that re-exports `keypath_config`
//! under another name.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Tokens naming the runtime crate: the `#[bind(crate = "...")]` override, or
/// `keypath_config`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { keypath_config }, ToTokens::to_token_stream)
}
