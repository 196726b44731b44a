//! Aggregation container for diagnostics promoted to an error.

use std::{error::Error, fmt};

use crate::Diagnostic;

/// Diagnostics collected during a single bind, reported together.
///
/// # Examples
///
/// ```
/// use keypath_config::AggregatedDiagnostics;
///
/// let aggregated = AggregatedDiagnostics::new(Vec::new());
/// assert!(aggregated.is_empty());
/// assert_eq!(aggregated.to_string(), "");
/// ```
#[derive(Debug, Default)]
pub struct AggregatedDiagnostics(Vec<Diagnostic>);

impl AggregatedDiagnostics {
    /// Create a new aggregation from collected diagnostics.
    #[must_use]
    pub const fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self(diagnostics)
    }

    /// Iterate over the contained diagnostics.
    #[must_use = "iterators should be consumed to inspect diagnostics"]
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Number of diagnostics in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing was aggregated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {diagnostic}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedDiagnostics {}

impl<'a> IntoIterator for &'a AggregatedDiagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedDiagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
