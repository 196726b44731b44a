//! Per-field binding annotations.

/// Optional metadata attached to a schema field.
///
/// Annotations are produced by `#[derive(Bind)]` from `#[bind(...)]`
/// attributes, or written by hand in manual [`crate::Bind`] impls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldAnnotation {
    /// No annotation: the field name is the lookup key.
    #[default]
    None,
    /// Explicit lookup key override.
    Key(&'static str),
    /// Exclude the field from binding entirely.
    Skip,
    /// Raw tag text such as `val=host` or `-`, interpreted by
    /// [`crate::PathResolver`] according to its [`crate::PathSyntax`].
    Tag(&'static str),
}
