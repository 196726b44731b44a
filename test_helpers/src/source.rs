//! A source wrapper that records every lookup.

use keypath_config::{KeyPath, RawValue, Source, SourceError};
use parking_lot::Mutex;

/// Wraps a [`Source`] and remembers the paths requested from it.
///
/// Paths are recorded joined with `/` in the order the walker asked for
/// them, including lookups that the inner source answered with an error.
#[derive(Debug)]
pub struct RecordingSource<S> {
    inner: S,
    lookups: Mutex<Vec<String>>,
}

impl<S> RecordingSource<S> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Paths looked up so far.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }

    /// Number of lookups so far.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().len()
    }
}

impl<S: Source> Source for RecordingSource<S> {
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError> {
        self.lookups.lock().push(path.join("/"));
        self.inner.get(path)
    }
}
