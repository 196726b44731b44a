//! In-memory source keyed by rendered path.

use std::collections::BTreeMap;

use super::{Source, SourceError};
use crate::{KeyPath, RawValue};

/// Source backed by a map from `/`-joined paths to values.
///
/// # Examples
///
/// ```
/// use keypath_config::{KeyPath, MapSource, RawValue, Source};
///
/// let source = MapSource::new().with("database/host", "db.internal");
/// let path = KeyPath::from_segments(["database", "host"]);
/// assert_eq!(source.get(&path).ok(), Some(RawValue::from("db.internal")));
/// ```
#[derive(Clone, Debug)]
pub struct MapSource {
    values: BTreeMap<String, RawValue>,
    separator: String,
}

impl MapSource {
    /// Create an empty source using `/` between segments.
    #[must_use]
    pub fn new() -> Self {
        Self::with_separator("/")
    }

    /// Create an empty source joining segments with `separator`.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            values: BTreeMap::new(),
            separator: separator.into(),
        }
    }

    /// Add a value at `path`, returning the source for chaining.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(path, value);
        self
    }

    /// Add or replace the value at `path`.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(path.into(), value.into());
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for MapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for MapSource {
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError> {
        let key = path.join(&self.separator);
        self.values
            .get(&key)
            .cloned()
            .ok_or_else(|| SourceError::not_found(key, "path is not set"))
    }
}
