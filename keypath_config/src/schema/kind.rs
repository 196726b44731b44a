//! Destination value kinds.

use std::fmt;

/// Kind of a destination scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Text.
    String,
    /// Any primitive integer.
    Integer,
    /// `f32` or `f64`.
    Float,
    /// `bool`.
    Bool,
}

impl ScalarKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a destination leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A single scalar.
    Scalar(ScalarKind),
    /// A one-dimensional collection of scalars.
    List(ScalarKind),
    /// A type outside the supported set, named as declared.
    Unsupported(&'static str),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::List(kind) => write!(f, "list of {kind}"),
            Self::Unsupported(name) => write!(f, "unsupported type `{name}`"),
        }
    }
}
