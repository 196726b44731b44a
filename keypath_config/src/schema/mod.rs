//! Field descriptions for destination structs.
//!
//! Destination types describe themselves through [`Bind`]: a record reports
//! a static table of [`FieldDescriptor`]s and hands out mutable access to
//! each field by index; a leaf reports its [`ValueKind`] and accepts a coerced
//! [`crate::Value`]. The walker drives binding entirely through this trait,
//! so no runtime type inspection is needed.

mod kind;
mod leaf;

pub use leaf::ScalarLeaf;

pub use kind::{ScalarKind, ValueKind};

use crate::{CoercionError, FieldAnnotation, Value};

/// How the walker treats a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    /// A primitive or one-dimensional collection fetched from the source.
    Leaf(ValueKind),
    /// A nested record bound under its own path segment.
    Record,
    /// An embedded record whose fields bind as if declared on the parent.
    Flatten,
}

/// Static description of one field of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name, the default lookup key.
    pub name: &'static str,
    /// Optional key override or skip marker.
    pub annotation: FieldAnnotation,
    /// Leaf, nested record, or flattened record.
    pub role: FieldRole,
}

impl FieldDescriptor {
    /// Describe a leaf field.
    #[must_use]
    pub const fn leaf(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            annotation: FieldAnnotation::None,
            role: FieldRole::Leaf(kind),
        }
    }

    /// Describe a nested record field.
    #[must_use]
    pub const fn record(name: &'static str) -> Self {
        Self {
            name,
            annotation: FieldAnnotation::None,
            role: FieldRole::Record,
        }
    }

    /// Describe an embedded record whose fields are flattened into the parent.
    #[must_use]
    pub const fn flatten(name: &'static str) -> Self {
        Self {
            name,
            annotation: FieldAnnotation::None,
            role: FieldRole::Flatten,
        }
    }

    /// Attach `annotation` to the descriptor.
    #[must_use]
    pub const fn with_annotation(mut self, annotation: FieldAnnotation) -> Self {
        self.annotation = annotation;
        self
    }
}

/// The shape a destination value reports to the walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A record with the listed fields, in declaration order.
    Record(&'static [FieldDescriptor]),
    /// A leaf value of the given kind.
    Leaf(ValueKind),
}

/// Capability implemented by every bindable destination type.
///
/// Derive it for records with `#[derive(Bind)]`. Leaf implementations are
/// provided for `String`, `bool`, the primitive integers, `f32`, `f64`, and
/// `Vec<T>` of those scalars.
///
/// # Examples
///
/// A hand-written record equivalent to what the derive generates:
///
/// ```
/// use keypath_config::{Bind, FieldDescriptor, ScalarKind, Shape, ValueKind};
///
/// #[derive(Default)]
/// struct Server {
///     port: u16,
/// }
///
/// impl Bind for Server {
///     fn shape(&self) -> Shape {
///         static FIELDS: &[FieldDescriptor] =
///             &[FieldDescriptor::leaf("port", ValueKind::Scalar(ScalarKind::Integer))];
///         Shape::Record(FIELDS)
///     }
///
///     fn field_mut(&mut self, index: usize) -> Option<&mut dyn Bind> {
///         match index {
///             0 => Some(&mut self.port),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Bind {
    /// Report whether this value is a record or a leaf.
    fn shape(&self) -> Shape;

    /// Mutable access to the field at `index` of [`Shape::Record`].
    ///
    /// Leaves and unsupported fields return `None`.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Bind> {
        let _ = index;
        None
    }

    /// Store a coerced value into a leaf.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] when the value does not fit the concrete
    /// type, or when called on a record.
    fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
        let _ = value;
        Err(CoercionError::NotALeaf)
    }
}
