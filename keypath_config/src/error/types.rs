//! Primary error enums for binding and coercion.

use thiserror::Error;

use super::aggregate::AggregatedDiagnostics;
use crate::{DocumentFormat, ScalarKind, ValueKind};

/// Errors returned from [`crate::populate`] and [`crate::load_config`].
///
/// Per-field failures never surface here; they are reported to a
/// [`crate::DiagnosticSink`] instead. Only structural misuse of the API and
/// loader-level problems are returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// No destination was supplied.
    #[error("binding target is missing")]
    MissingTarget,

    /// The destination is a leaf where a record was required.
    #[error("binding target must be a record, found {kind}")]
    NotARecord {
        /// Kind reported by the destination.
        kind: ValueKind,
    },

    /// The loader was configured inconsistently.
    #[error("invalid load options: {message}")]
    InvalidOptions {
        /// Explanation of the misconfiguration.
        message: String,
    },

    /// A configuration document could not be decoded.
    #[error("failed to decode {format} document: {source}")]
    Document {
        /// Format the document was parsed as.
        format: DocumentFormat,
        /// Underlying decoder failure.
        #[source]
        source: Box<figment::Error>,
    },

    /// A strict completeness check found unbound fields.
    #[error("configuration incomplete:\n{0}")]
    Incomplete(Box<AggregatedDiagnostics>),
}

/// A source value could not be converted into the destination kind.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum CoercionError {
    /// Text (or the text rendering of a value) is not a valid literal.
    #[error("cannot parse `{value}` as {kind}")]
    Parse {
        /// Text that failed to parse.
        value: String,
        /// Kind the text was parsed as.
        kind: ScalarKind,
    },

    /// The value is valid but does not fit the concrete field type.
    #[error("value {value} does not fit in `{target}`")]
    OutOfRange {
        /// Rendered value.
        value: String,
        /// Destination type name.
        target: &'static str,
    },

    /// A collection element failed to convert.
    #[error("element {index}: {source}")]
    Element {
        /// Zero-based element index.
        index: usize,
        /// Failure for that element.
        #[source]
        source: Box<CoercionError>,
    },

    /// The destination kind is outside the supported set.
    #[error("unsupported destination type `{kind}`")]
    UnsupportedKind {
        /// Declared type name.
        kind: &'static str,
    },

    /// A coerced value does not match the shape of the destination.
    #[error("expected {expected}, got {found}")]
    Mismatch {
        /// Kind the destination accepts.
        expected: ValueKind,
        /// Kind that was supplied.
        found: &'static str,
    },

    /// A value was assigned to a record.
    #[error("cannot assign a value to a record")]
    NotALeaf,
}
