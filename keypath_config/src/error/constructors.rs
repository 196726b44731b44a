//! Constructors and classification helpers for `BindError`.

use super::{AggregatedDiagnostics, BindError};
use crate::{Diagnostic, DocumentFormat};

impl BindError {
    /// Construct an [`BindError::InvalidOptions`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypath_config::BindError;
    /// let e = BindError::invalid_options("store mount is empty");
    /// assert!(matches!(e, BindError::InvalidOptions { .. }));
    /// ```
    #[must_use]
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Construct a document decoding error from a [`figment::Error`].
    #[must_use]
    pub fn document(format: DocumentFormat, source: figment::Error) -> Self {
        Self::Document {
            format,
            source: Box::new(source),
        }
    }

    /// Promote collected diagnostics into an [`BindError::Incomplete`] error.
    ///
    /// Returns `None` when `diagnostics` is empty.
    #[must_use]
    pub fn try_incomplete(diagnostics: Vec<Diagnostic>) -> Option<Self> {
        if diagnostics.is_empty() {
            return None;
        }
        Some(Self::Incomplete(Box::new(AggregatedDiagnostics::new(
            diagnostics,
        ))))
    }

    /// Returns `true` for errors describing misuse of the destination itself.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::MissingTarget | Self::NotARecord { .. })
    }
}
