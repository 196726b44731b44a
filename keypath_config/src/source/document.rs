//! Source over a parsed configuration document.

use std::fmt;

use figment::{
    Figment, Provider,
    providers::{Format, Json, Toml},
    value::{Dict, Value as FigmentValue},
};

use super::{Source, SourceError, yaml::SaphyrYaml};
use crate::{BindError, KeyPath, RawValue};

/// Text formats accepted for configuration documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DocumentFormat {
    /// YAML, parsed with strict booleans.
    Yaml,
    /// TOML.
    Toml,
    /// JSON.
    Json,
}

impl DocumentFormat {
    /// Lower-case format name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Build a figment holding `text` parsed as this format.
    pub(crate) fn figment(self, text: &str) -> Figment {
        match self {
            Self::Yaml => Figment::from(SaphyrYaml::string(text)),
            Self::Toml => Figment::from(Toml::string(text)),
            Self::Json => Figment::from(Json::string(text)),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source that navigates a parsed document one segment at a time.
///
/// Every path segment must name a key of a nested table; the value found at
/// the final segment is converted into a [`RawValue`]. Explicit `null`
/// values count as absent.
///
/// # Examples
///
/// ```
/// use keypath_config::{DocumentFormat, DocumentSource, KeyPath, RawValue, Source};
///
/// let source = DocumentSource::parse("[server]\nport = 8080\n", DocumentFormat::Toml)?;
/// let port = source.get(&KeyPath::from_segments(["server", "port"]));
/// assert_eq!(port.ok(), Some(RawValue::Integer(8080)));
/// # Ok::<(), keypath_config::BindError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentSource {
    root: Dict,
}

impl DocumentSource {
    /// Parse `text` as `format`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Document`] when the text is malformed or its top
    /// level is not a mapping.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, BindError> {
        Self::from_figment(&format.figment(text)).map_err(|err| BindError::document(format, err))
    }

    /// Collect the data of any figment provider.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`figment::Error`].
    pub fn from_provider<P: Provider>(provider: P) -> Result<Self, figment::Error> {
        Self::from_figment(&Figment::from(provider))
    }

    /// Wrap an already parsed document.
    #[must_use]
    pub const fn from_dict(root: Dict) -> Self {
        Self { root }
    }

    fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        figment.extract::<Dict>().map(Self::from_dict)
    }

    fn find(&self, path: &KeyPath) -> Option<&FigmentValue> {
        let (first, rest) = path.segments().split_first()?;
        rest.iter().try_fold(self.root.get(first)?, |node, segment| match node {
            FigmentValue::Dict(_, table) => table.get(segment),
            _ => None,
        })
    }
}

impl Source for DocumentSource {
    fn get(&self, path: &KeyPath) -> Result<RawValue, SourceError> {
        let node = self
            .find(path)
            .ok_or_else(|| SourceError::not_found(path.to_string(), "key is absent from the document"))?;
        let json = serde_json::to_value(node).map_err(|err| SourceError::fetch(path.to_string(), err))?;
        RawValue::from_json(json)
            .ok_or_else(|| SourceError::not_found(path.to_string(), "value is null"))
    }
}
