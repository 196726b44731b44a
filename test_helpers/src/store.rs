//! A secret store wrapper that records every read.

use keypath_config::{Secret, SecretStore, StoreError};
use parking_lot::Mutex;

/// Wraps a [`SecretStore`] and remembers the secret paths it was asked for.
#[derive(Debug)]
pub struct RecordingStore<S> {
    inner: S,
    reads: Mutex<Vec<String>>,
}

impl<S> RecordingStore<S> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Secret paths read so far, in order.
    #[must_use]
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().clone()
    }
}

impl<S: SecretStore> SecretStore for RecordingStore<S> {
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError> {
        self.reads.lock().push(path.to_owned());
        self.inner.read(path)
    }
}
