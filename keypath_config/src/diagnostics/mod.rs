//! Per-field failure reporting.
//!
//! Binding never aborts because one field could not be filled. Each such
//! failure becomes a [`Diagnostic`] handed to a caller-supplied
//! [`DiagnosticSink`]; callers choose whether to log, collect, or escalate.

use std::fmt;

use thiserror::Error;

use crate::{BindError, CoercionError, SourceError};

/// Why a single field was left at its prior value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The source had no value or failed to fetch it.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The fetched value did not convert to the field type.
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// The field type is outside the supported set.
    #[error("unsupported field type `{kind}`")]
    UnsupportedKind {
        /// Declared type name.
        kind: &'static str,
    },

    /// A nested record could not be walked at all.
    #[error("nested record not bound: {0}")]
    Nested(Box<BindError>),
}

/// A recoverable failure tied to one field.
#[derive(Debug)]
pub struct Diagnostic {
    /// Rendered lookup path of the field.
    pub path: String,
    /// Declared field name.
    pub field: &'static str,
    /// What went wrong.
    pub error: FieldError,
}

impl Diagnostic {
    /// Create a diagnostic for `field` at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, field: &'static str, error: impl Into<FieldError>) -> Self {
        Self {
            path: path.into(),
            field,
            error: error.into(),
        }
    }

    /// Returns `true` when the source simply had no value.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(&self.error, FieldError::Source(source) if source.is_not_found())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` (field `{}`): {}", self.path, self.field, self.error)
    }
}

/// Receiver for per-field diagnostics.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

/// Sink that logs every diagnostic at `WARN` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            path = %diagnostic.path,
            field = diagnostic.field,
            error = %diagnostic.error,
            "configuration field not bound"
        );
    }
}

/// Collecting sink with a strict completeness check.
///
/// # Examples
///
/// ```
/// use keypath_config::{Diagnostic, DiagnosticSink, Diagnostics, SourceError};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.record(Diagnostic::new(
///     "db/host",
///     "host",
///     SourceError::not_found("db/host", "path is not set"),
/// ));
/// assert_eq!(diagnostics.len(), 1);
/// assert!(diagnostics.into_result().is_err());
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over recorded diagnostics in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Consume the collector, returning the recorded diagnostics.
    #[must_use]
    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.entries
    }

    /// Treat any recorded diagnostic as an error.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Incomplete`] holding every diagnostic when at
    /// least one was recorded.
    pub fn into_result(self) -> Result<(), BindError> {
        BindError::try_incomplete(self.entries).map_or(Ok(()), Err)
    }
}

impl DiagnosticSink for Diagnostics {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests;
