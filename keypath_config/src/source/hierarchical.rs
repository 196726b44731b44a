//! Secret-store adapter using a key/value version 2 layout.
//!
//! A lookup path is split into a group (every segment but the last) and a
//! final key. The group names one secret, read from `<mount>/data/<group>`,
//! and the final key selects an entry inside it.

use std::collections::BTreeMap;
use std::error::Error;

use thiserror::Error;
use tracing::debug;

use super::{Source, SourceError};
use crate::{KeyPath, RawValue};

/// Entries of one secret.
pub type Secret = BTreeMap<String, RawValue>;

/// Failure reported by a [`SecretStore`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The store could not be reached or refused the request.
    #[error("secret store unavailable: {message}")]
    Unavailable {
        /// Transport or server message.
        message: String,
    },

    /// The store answered with data that is not a key/value record.
    #[error("secret at `{path}` is malformed: {message}")]
    Malformed {
        /// Secret path that was read.
        path: String,
        /// What was wrong with the payload.
        message: String,
    },

    /// Any other client failure.
    #[error(transparent)]
    Client(Box<dyn Error + Send + Sync>),
}

/// Read access to a hierarchical secret store.
///
/// The HTTP client lives outside this crate; implement this trait over it.
pub trait SecretStore {
    /// Read the secret stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the read itself fails. A secret that
    /// does not exist is `Ok(None)`.
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError>;
}

impl<S: SecretStore + ?Sized> SecretStore for &S {
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError> {
        (**self).read(path)
    }
}

impl<S: SecretStore + ?Sized> SecretStore for Box<S> {
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError> {
        (**self).read(path)
    }
}

/// In-process [`SecretStore`] keyed by full secret path.
///
/// # Examples
///
/// ```
/// use keypath_config::{MemoryStore, RawValue, SecretStore};
///
/// let store = MemoryStore::new().with_secret("kv/data/db", [("host", "db.internal")]);
/// let secret = store.read("kv/data/db")?.expect("secret exists");
/// assert_eq!(secret.get("host"), Some(&RawValue::from("db.internal")));
/// # Ok::<(), keypath_config::StoreError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    secrets: BTreeMap<String, Secret>,
    failures: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a secret at `path`, returning the store for chaining.
    #[must_use]
    pub fn with_secret<I, K, V>(mut self, path: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        self.insert(path, entries);
        self
    }

    /// Make every read of `path` fail with [`StoreError::Unavailable`].
    #[must_use]
    pub fn with_failure(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(path.into(), message.into());
        self
    }

    /// Store or replace the secret at `path`.
    pub fn insert<I, K, V>(&mut self, path: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        let secret = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.secrets.insert(path.into(), secret);
    }
}

impl SecretStore for MemoryStore {
    fn read(&self, path: &str) -> Result<Option<Secret>, StoreError> {
        if let Some(message) = self.failures.get(path) {
            return Err(StoreError::Unavailable {
                message: message.clone(),
            });
        }
        Ok(self.secrets.get(path).cloned())
    }
}

/// [`Source`] reading leaves from a [`SecretStore`] mount.
///
/// # Examples
///
/// ```
/// use keypath_config::{HierarchicalSource, KeyPath, MemoryStore, RawValue, Source};
///
/// let store = MemoryStore::new().with_secret("kv/data/database", [("port", 5432_i64)]);
/// let source = HierarchicalSource::new(store, "kv");
/// let port = source.get(&KeyPath::from_segments(["database", "port"]));
/// assert_eq!(port.ok(), Some(RawValue::Integer(5432)));
/// ```
#[derive(Clone, Debug)]
pub struct HierarchicalSource<S> {
    store: S,
    mount: String,
    separator: String,
}

impl<S: SecretStore> HierarchicalSource<S> {
    /// Read secrets from `mount` in `store`, joining groups with `/`.
    #[must_use]
    pub fn new(store: S, mount: impl Into<String>) -> Self {
        Self {
            store,
            mount: mount.into(),
            separator: "/".to_owned(),
        }
    }

    /// Join group segments with `separator` instead of `/`.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The mount secrets are read from.
    #[must_use]
    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// Secret path holding the group of `path`, or `None` for an empty group.
    #[must_use]
    pub fn secret_path(&self, path: &KeyPath) -> Option<String> {
        let group = path.group();
        if group.is_empty() {
            return None;
        }
        Some(format!("{}/data/{}", self.mount, group.join(&self.separator)))
    }
}

impl<S: SecretStore> Source for HierarchicalSource<S> {
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError> {
        let rendered = path.join(&self.separator);
        let Some(key) = path.key() else {
            return Err(SourceError::not_found(rendered, "path has no key"));
        };
        let Some(secret_path) = self.secret_path(path) else {
            return Err(SourceError::not_found(rendered, "path has no secret group"));
        };
        debug!(secret = %secret_path, key, "reading secret");
        let secret = match self.store.read(&secret_path) {
            Ok(Some(secret)) => secret,
            Ok(None) => return Err(SourceError::not_found(rendered, "secret does not exist")),
            Err(err) => return Err(SourceError::fetch(rendered, err)),
        };
        secret
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::not_found(rendered, "key is absent from the secret"))
    }
}
