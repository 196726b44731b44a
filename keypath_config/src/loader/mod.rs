//! One-call configuration loading from a document or a secret store.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    Bind, BindError, Diagnostics, DocumentFormat, HierarchicalSource, KeyPath,
    PathResolver, PathSyntax, SecretStore, Walker,
};

/// Backend a configuration is loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    /// A text document decoded in one pass.
    Document,
    /// A hierarchical secret store walked field by field.
    Store,
}

struct StoreInput<'s> {
    mount: String,
    store: Box<dyn SecretStore + 's>,
}

/// Inputs for [`load_config`].
///
/// # Examples
///
/// ```
/// use keypath_config::{DocumentFormat, LoadOptions, MemoryStore, Provider};
///
/// let options = LoadOptions::new()
///     .document("port: 8080", DocumentFormat::Yaml)
///     .store("kv", MemoryStore::new())
///     .provider(Provider::Store);
/// assert_eq!(options.selected_provider().ok(), Some(Provider::Store));
/// ```
#[derive(Default)]
pub struct LoadOptions<'s> {
    document: Option<(String, DocumentFormat)>,
    store: Option<StoreInput<'s>>,
    provider: Option<Provider>,
    base_path: KeyPath,
    syntax: PathSyntax,
}

impl<'s> LoadOptions<'s> {
    /// Start with no inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a configuration document.
    #[must_use]
    pub fn document(mut self, text: impl Into<String>, format: DocumentFormat) -> Self {
        self.document = Some((text.into(), format));
        self
    }

    /// Supply a secret store and the mount to read from.
    #[must_use]
    pub fn store(mut self, mount: impl Into<String>, store: impl SecretStore + 's) -> Self {
        self.store = Some(StoreInput {
            mount: mount.into(),
            store: Box::new(store),
        });
        self
    }

    /// Force a provider instead of inferring one from the inputs.
    #[must_use]
    pub const fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Path the configuration root is bound under.
    #[must_use]
    pub fn base_path(mut self, path: KeyPath) -> Self {
        self.base_path = path;
        self
    }

    /// Annotation and path syntax used when walking a store.
    #[must_use]
    pub fn syntax(mut self, syntax: PathSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Validate the inputs and choose the provider that will be used.
    ///
    /// An explicit provider wins, then a document, then a store.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::InvalidOptions`] when neither input was given,
    /// when the store mount is empty, or when the explicit provider lacks
    /// its input.
    pub fn selected_provider(&self) -> Result<Provider, BindError> {
        if self.document.is_none() && self.store.is_none() {
            return Err(BindError::invalid_options(
                "either a document or a secret store is required",
            ));
        }
        if self
            .store
            .as_ref()
            .is_some_and(|input| input.mount.trim().is_empty())
        {
            return Err(BindError::invalid_options("secret store mount is empty"));
        }
        match self.provider {
            Some(Provider::Document) if self.document.is_none() => Err(BindError::invalid_options(
                "document provider selected without a document",
            )),
            Some(Provider::Store) if self.store.is_none() => Err(BindError::invalid_options(
                "store provider selected without a secret store",
            )),
            Some(provider) => Ok(provider),
            None if self.document.is_some() => Ok(Provider::Document),
            None => Ok(Provider::Store),
        }
    }
}

impl fmt::Debug for LoadOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("document", &self.document.as_ref().map(|(_, format)| format))
            .field("store", &self.store.as_ref().map(|input| &input.mount))
            .field("provider", &self.provider)
            .field("base_path", &self.base_path)
            .field("syntax", &self.syntax)
            .finish()
    }
}

/// A loaded configuration and the fields that could not be bound.
#[derive(Debug)]
#[non_exhaustive]
pub struct Loaded<T> {
    /// The populated configuration.
    pub config: T,
    /// Per-field failures, empty for document loads.
    pub diagnostics: Diagnostics,
}

impl<T> Loaded<T> {
    /// Return the configuration only if every field was bound.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Incomplete`] listing every diagnostic.
    pub fn into_complete(self) -> Result<T, BindError> {
        self.diagnostics.into_result()?;
        Ok(self.config)
    }
}

/// Load a `T` from the inputs in `options`.
///
/// Documents are decoded in one pass through serde, so a malformed document
/// or a value of the wrong type fails the whole load. Secret stores are
/// walked field by field starting from `T::default()`; fields that cannot be
/// bound keep their defaults and are returned as diagnostics.
///
/// # Errors
///
/// Returns [`BindError::InvalidOptions`] for inconsistent options,
/// [`BindError::Document`] when a document cannot be decoded into `T`, and
/// [`BindError::NotARecord`] when `T` is not a record.
///
/// # Examples
///
/// ```
/// use keypath_config::{Bind, DocumentFormat, LoadOptions, load_config};
/// use serde::Deserialize;
///
/// #[derive(Bind, Default, Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let loaded = load_config::<Settings>(
///     LoadOptions::new().document("port = 8080", DocumentFormat::Toml),
/// )?;
/// assert_eq!(loaded.config.port, 8080);
/// # Ok::<(), keypath_config::BindError>(())
/// ```
pub fn load_config<T>(options: LoadOptions<'_>) -> Result<Loaded<T>, BindError>
where
    T: Bind + Default + DeserializeOwned,
{
    let provider = options.selected_provider()?;
    debug!(?provider, base = %options.base_path, "loading configuration");
    let LoadOptions {
        document,
        store,
        base_path,
        syntax,
        ..
    } = options;
    match (provider, document, store) {
        (Provider::Document, Some((text, format)), _) => load_document(&text, format, &base_path),
        (Provider::Store, _, Some(input)) => load_store(input, &base_path, syntax),
        _ => Err(BindError::invalid_options("selected provider has no input")),
    }
}

fn load_document<T: DeserializeOwned>(
    text: &str,
    format: DocumentFormat,
    base: &KeyPath,
) -> Result<Loaded<T>, BindError> {
    let figment = format.figment(text);
    let decoded = if base.is_empty() {
        figment.extract()
    } else {
        figment.extract_inner(&base.join("."))
    };
    let config = decoded.map_err(|err| BindError::document(format, err))?;
    Ok(Loaded {
        config,
        diagnostics: Diagnostics::new(),
    })
}

fn load_store<T: Bind + Default>(
    input: StoreInput<'_>,
    base: &KeyPath,
    syntax: PathSyntax,
) -> Result<Loaded<T>, BindError> {
    let source = HierarchicalSource::new(input.store, input.mount).with_separator(syntax.separator());
    let resolver = PathResolver::new(syntax);
    let mut diagnostics = Diagnostics::new();
    let mut config = T::default();
    Walker::new(&source, &resolver, &mut diagnostics).populate(Some(&mut config), base)?;
    if !diagnostics.is_empty() {
        warn!(
            count = diagnostics.len(),
            mount = source.mount(),
            "configuration loaded with unbound fields"
        );
    }
    Ok(Loaded {
        config,
        diagnostics,
    })
}
