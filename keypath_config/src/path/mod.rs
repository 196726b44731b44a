//! Lookup path derivation for schema fields.
//!
//! Every field resolves to a lookup key: an explicit override from its
//! annotation, or the declared field name. Nested records extend the parent
//! path with that key, so a field `host` inside a `database` record is looked
//! up at `database/host`.

mod annotation;
mod key_path;

pub use annotation::FieldAnnotation;
pub use key_path::KeyPath;

/// Characters and markers that make up the annotation and path syntax.
///
/// The defaults mirror the tag convention `val=<key>` for overrides and `-`
/// for skipped fields, with `/` joining path segments.
///
/// # Examples
///
/// ```
/// use keypath_config::PathSyntax;
///
/// let syntax = PathSyntax::default().with_separator(".");
/// assert_eq!(syntax.separator(), ".");
/// assert_eq!(syntax.key_prefix(), "val=");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSyntax {
    separator: String,
    key_prefix: String,
    skip_marker: String,
    part_delimiter: char,
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self {
            separator: String::from("/"),
            key_prefix: String::from("val="),
            skip_marker: String::from("-"),
            part_delimiter: ',',
        }
    }
}

impl PathSyntax {
    /// Replace the segment separator used when rendering paths.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the prefix introducing a key override inside a tag.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Replace the tag value that excludes a field from binding.
    #[must_use]
    pub fn with_skip_marker(mut self, marker: impl Into<String>) -> Self {
        self.skip_marker = marker.into();
        self
    }

    /// Replace the delimiter between the parts of a tag.
    #[must_use]
    pub const fn with_part_delimiter(mut self, delimiter: char) -> Self {
        self.part_delimiter = delimiter;
        self
    }

    /// Separator placed between path segments.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Prefix introducing a key override inside a tag.
    #[must_use]
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Tag value excluding a field from binding.
    #[must_use]
    pub fn skip_marker(&self) -> &str {
        &self.skip_marker
    }

    /// Delimiter between the parts of a tag.
    #[must_use]
    pub const fn part_delimiter(&self) -> char {
        self.part_delimiter
    }
}

/// Result of resolving one field against its parent path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Key used for this field at its own level.
    pub lookup_key: &'a str,
    /// Parent path extended with [`Self::lookup_key`].
    pub child_path: KeyPath,
}

/// Derives lookup keys and child paths from field names and annotations.
///
/// Resolution is a pure function of the parent path, the field name, and the
/// annotation; the resolver holds nothing but its [`PathSyntax`].
#[derive(Clone, Debug, Default)]
pub struct PathResolver {
    syntax: PathSyntax,
}

impl PathResolver {
    /// Create a resolver for `syntax`.
    #[must_use]
    pub const fn new(syntax: PathSyntax) -> Self {
        Self { syntax }
    }

    /// The syntax this resolver interprets annotations with.
    #[must_use]
    pub const fn syntax(&self) -> &PathSyntax {
        &self.syntax
    }

    /// Returns `true` when `annotation` excludes the field from binding.
    #[must_use]
    pub fn is_skipped(&self, annotation: &FieldAnnotation) -> bool {
        match annotation {
            FieldAnnotation::Skip => true,
            FieldAnnotation::Tag(tag) => tag.trim() == self.syntax.skip_marker,
            FieldAnnotation::None | FieldAnnotation::Key(_) => false,
        }
    }

    /// The key `name` is looked up under at its own level.
    ///
    /// An explicit, non-empty override wins; otherwise the field name is
    /// used. When a tag carries several overrides the last one applies.
    #[must_use]
    pub fn lookup_key<'a>(&self, name: &'a str, annotation: &FieldAnnotation) -> &'a str {
        let explicit = match *annotation {
            FieldAnnotation::Key(key) => Some(key),
            FieldAnnotation::Tag(tag) => self.tag_key(tag),
            FieldAnnotation::None | FieldAnnotation::Skip => None,
        };
        explicit.filter(|key| !key.is_empty()).unwrap_or(name)
    }

    /// Resolve a field against `parent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypath_config::{FieldAnnotation, KeyPath, PathResolver};
    ///
    /// let resolver = PathResolver::default();
    /// let parent = KeyPath::root().child("database");
    /// let plain = resolver.resolve(&parent, "Host", &FieldAnnotation::None);
    /// assert_eq!(plain.child_path.join("/"), "database/Host");
    ///
    /// let tagged = resolver.resolve(&parent, "Host", &FieldAnnotation::Tag("val=host"));
    /// assert_eq!(tagged.lookup_key, "host");
    /// assert_eq!(tagged.child_path.join("/"), "database/host");
    /// ```
    #[must_use]
    pub fn resolve<'a>(
        &self,
        parent: &KeyPath,
        name: &'a str,
        annotation: &FieldAnnotation,
    ) -> Resolution<'a> {
        let lookup_key = self.lookup_key(name, annotation);
        Resolution {
            lookup_key,
            child_path: parent.child(lookup_key),
        }
    }

    /// Render `path` with this resolver's separator.
    #[must_use]
    pub fn render(&self, path: &KeyPath) -> String {
        path.join(&self.syntax.separator)
    }

    fn tag_key(&self, tag: &'static str) -> Option<&'static str> {
        tag.split(self.syntax.part_delimiter)
            .filter_map(|part| part.trim().strip_prefix(self.syntax.key_prefix.as_str()))
            .last()
    }
}
