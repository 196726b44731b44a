//! Scratch directories for tests that read configuration documents from disk.
//!
//! Each call runs inside its own [`figment::Jail`]: a temporary working
//! directory that is removed, with the previous directory restored, once the
//! closure returns.

use anyhow::{Result, anyhow};

/// Runs `f` in a fresh jail and hands back whatever it produced.
///
/// # Errors
///
/// Returns the closure's error, or a jail setup failure, as an
/// [`anyhow::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut produced = None;
    figment::Jail::try_with(|jail| f(jail).map(|value| produced = Some(value)))
        .map_err(|err| anyhow!("jailed test failed: {err}"))?;
    produced.ok_or_else(|| anyhow!("jail closure produced no value"))
}

/// Writes `contents` to `name` in the jail and reads the file back.
///
/// # Errors
///
/// Returns a figment error when the file cannot be written or read.
pub fn write_document(
    jail: &mut figment::Jail,
    name: &str,
    contents: &str,
) -> figment::error::Result<String> {
    jail.create_file(name, contents)?;
    std::fs::read_to_string(jail.directory().join(name))
        .map_err(|err| figment::Error::from(err.to_string()))
}
