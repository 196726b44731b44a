//! Hierarchical lookup paths.

use std::fmt;

/// Ordered lookup keys from the schema root to a node.
///
/// Paths are never mutated in place: [`KeyPath::child`] returns an extended
/// copy so each recursive call owns the path it was given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path at the schema root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from its segments. Empty segments are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypath_config::KeyPath;
    ///
    /// let path = KeyPath::from_segments(["secret", "", "db"]);
    /// assert_eq!(path.join("/"), "secret/db");
    /// ```
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|segment: &String| !segment.is_empty())
                .collect(),
        }
    }

    /// Split `raw` on `separator` into a path.
    #[must_use]
    pub fn parse(raw: &str, separator: &str) -> Self {
        if separator.is_empty() {
            return Self::from_segments([raw]);
        }
        Self::from_segments(raw.split(separator))
    }

    /// Return a new path extended with `segment`.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.to_owned());
        Self { segments }
    }

    /// All segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every segment except the last: the group a leaf key lives in.
    #[must_use]
    pub fn group(&self) -> &[String] {
        self.segments
            .split_last()
            .map_or(&[], |(_, group)| group)
    }

    /// The final segment, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Render the path with `separator` between segments.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

/// Renders with the default `/` separator.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("/"))
    }
}
