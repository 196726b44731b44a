//! YAML provider backed by `serde-saphyr`.

use std::collections::BTreeMap;

use figment::{
    Metadata, Profile, Provider,
    error::Kind,
    value::{Dict, Value as FigmentValue},
};
use serde_json::Value as Json;
use serde_saphyr::Options;

/// Figment provider that parses an in-memory YAML document.
///
/// Booleans are strict: only `true` and `false` are booleans, so values such
/// as `yes` or `on` stay strings and go through the usual text coercion.
/// Null mapping entries (`~`, `null`, or no value at all) are dropped so they
/// read as absent keys.
#[derive(Debug, Clone)]
pub(crate) struct SaphyrYaml {
    contents: String,
}

impl SaphyrYaml {
    /// Construct a provider over `contents`.
    pub(crate) fn string(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    fn parse_value(contents: &str) -> Result<Json, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options(
            contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
    }
}

/// Remove null entries from every mapping in `value`.
fn drop_nulls(value: Json) -> Json {
    match value {
        Json::Object(entries) => Json::Object(
            entries
                .into_iter()
                .filter(|(_, entry)| !entry.is_null())
                .map(|(key, entry)| (key, drop_nulls(entry)))
                .collect(),
        ),
        Json::Array(items) => Json::Array(items.into_iter().map(drop_nulls).collect()),
        other => other,
    }
}

fn invalid(err: &dyn std::fmt::Display) -> figment::Error {
    figment::Error::from(Kind::Message(format!("invalid YAML: {err}")))
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::named("inline YAML document")
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        if self.contents.trim().is_empty() {
            return Ok(Profile::Default.collect(Dict::new()));
        }
        let parsed = Self::parse_value(&self.contents).map_err(|err| invalid(&err))?;
        let value = FigmentValue::serialize(drop_nulls(parsed)).map_err(|err| invalid(&err))?;
        let actual = value.to_actual();
        let dict = value
            .into_dict()
            .ok_or_else(|| figment::Error::from(Kind::InvalidType(actual, "map".into())))?;
        Ok(Profile::Default.collect(dict))
    }
}
