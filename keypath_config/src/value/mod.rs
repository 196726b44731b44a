//! Untyped source values and the typed values produced by coercion.
//!
//! Sources hand back [`RawValue`]s: whatever the backing store happened to
//! hold, be it text, a number, a boolean, a list, or a nested table. The
//! coercion engine turns those into [`Value`]s whose shape matches the
//! destination field.

use std::collections::BTreeMap;
use std::fmt;

/// A loosely typed value returned by a [`crate::Source`].
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// Textual value.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Ordered list of untyped elements.
    List(Vec<RawValue>),
    /// Keyed record, as returned when a source resolves a path to a group.
    Table(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Returns the text when the value is already a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements when the value is a native list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a JSON document into a raw value.
    ///
    /// A top-level `null` has no raw representation and yields `None`.
    /// Nested `null` table entries are dropped and `null` list elements become
    /// empty strings so list indices stay stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypath_config::RawValue;
    /// use serde_json::json;
    ///
    /// let raw = RawValue::from_json(json!({"port": 8080})).expect("not null");
    /// assert!(matches!(raw, RawValue::Table(_)));
    /// assert!(RawValue::from_json(json!(null)).is_none());
    /// ```
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;
        Some(match value {
            Json::Null => return None,
            Json::Bool(flag) => Self::Bool(flag),
            Json::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::String(number.to_string())),
            Json::String(text) => Self::String(text),
            Json::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(|item| Self::from_json(item).unwrap_or_else(|| Self::String(String::new())))
                    .collect(),
            ),
            Json::Object(map) => Self::Table(
                map.into_iter()
                    .filter_map(|(key, item)| Self::from_json(item).map(|raw| (key, raw)))
                    .collect(),
            ),
        })
    }
}

/// Generic to-text rendering used as the fallback before parsing.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Table(entries) => {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<Self>> for RawValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

/// A coerced scalar whose variant matches a [`crate::ScalarKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Text.
    String(String),
    /// Signed integer, narrowed to the field type on assignment.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

/// A coerced value ready to be assigned to a destination leaf.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Single scalar for a scalar leaf.
    Scalar(Scalar),
    /// One-dimensional collection for a list leaf.
    List(Vec<Scalar>),
}
