//! Sources that supply raw values by lookup path.
//!
//! A [`Source`] answers one question: what is stored at this [`KeyPath`]?
//! Absence and transport failures are reported as [`SourceError`]s, which
//! the walker records as diagnostics rather than aborting the bind.

mod document;
mod hierarchical;
mod map;
mod yaml;

pub use document::{DocumentFormat, DocumentSource};
pub use hierarchical::{HierarchicalSource, MemoryStore, Secret, SecretStore, StoreError};
pub use map::MapSource;

use std::error::Error;
use thiserror::Error;

use crate::{KeyPath, RawValue};

/// Failure to produce a value for a path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Nothing is stored at the path.
    #[error("no value at `{path}`: {reason}")]
    NotFound {
        /// Rendered lookup path.
        path: String,
        /// Why the lookup came back empty.
        reason: &'static str,
    },

    /// The source failed for a reason unrelated to absence.
    #[error("failed to fetch `{path}`: {source}")]
    Fetch {
        /// Rendered lookup path.
        path: String,
        /// Underlying transport or decoding failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl SourceError {
    /// Construct a [`SourceError::NotFound`] for `path`.
    #[must_use]
    pub fn not_found(path: impl Into<String>, reason: &'static str) -> Self {
        Self::NotFound {
            path: path.into(),
            reason,
        }
    }

    /// Construct a [`SourceError::Fetch`] for `path`.
    #[must_use]
    pub fn fetch(path: impl Into<String>, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Fetch {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns `true` when the value is simply absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A provider of raw values addressed by hierarchical path.
///
/// Implementations used from several threads at once must be `Sync`; the
/// walker itself only needs shared access.
pub trait Source {
    /// Fetch the value stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] when nothing is stored at `path`,
    /// or [`SourceError::Fetch`] when the lookup itself failed.
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError>;
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError> {
        (**self).get(path)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError> {
        (**self).get(path)
    }
}

#[cfg(test)]
mod tests;
