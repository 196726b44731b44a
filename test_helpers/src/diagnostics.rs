//! Assertions over collected diagnostics.

use anyhow::{Result, ensure};
use keypath_config::Diagnostic;

/// Rendered paths of `diagnostics`, in recording order.
#[must_use]
pub fn rendered_paths<'a, I>(diagnostics: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Diagnostic>,
{
    diagnostics
        .into_iter()
        .map(|diagnostic| diagnostic.path.clone())
        .collect()
}

/// Checks that `diagnostics` name exactly `expected`, in order.
///
/// # Errors
///
/// Returns an error listing both sides when the paths differ.
pub fn expect_paths<'a, I>(diagnostics: I, expected: &[&str]) -> Result<()>
where
    I: IntoIterator<Item = &'a Diagnostic>,
{
    let actual = rendered_paths(diagnostics);
    ensure!(
        actual.iter().map(String::as_str).eq(expected.iter().copied()),
        "expected diagnostics for {expected:?}, got {actual:?}"
    );
    Ok(())
}
