//! Conversion of untyped source values into destination kinds.
//!
//! [`coerce_scalar`] handles single values with text fallback parsing;
//! [`coerce_list`] decodes native lists, bracketed text, comma-separated
//! text, and bare scalars into one-dimensional collections.

mod collection;
mod scalar;

pub use collection::coerce_list;
pub use scalar::coerce_scalar;

use crate::{CoercionError, RawValue, Value, ValueKind};

/// Coerce `raw` into a value matching the destination leaf `kind`.
///
/// # Errors
///
/// Returns [`CoercionError::UnsupportedKind`] for kinds outside the supported
/// set, or the scalar/collection coercion failure.
///
/// # Examples
///
/// ```
/// use keypath_config::{RawValue, Scalar, ScalarKind, Value, ValueKind, coerce_value};
///
/// let value = coerce_value(&RawValue::from("42"), ValueKind::Scalar(ScalarKind::Integer));
/// assert_eq!(value, Ok(Value::Scalar(Scalar::Integer(42))));
///
/// let list = coerce_value(&RawValue::Integer(7), ValueKind::List(ScalarKind::Integer));
/// assert_eq!(list, Ok(Value::List(vec![Scalar::Integer(7)])));
/// ```
pub fn coerce_value(raw: &RawValue, kind: ValueKind) -> Result<Value, CoercionError> {
    match kind {
        ValueKind::Scalar(scalar) => coerce_scalar(raw, scalar).map(Value::Scalar),
        ValueKind::List(element) => coerce_list(raw, element).map(Value::List),
        ValueKind::Unsupported(name) => Err(CoercionError::UnsupportedKind { kind: name }),
    }
}

#[cfg(test)]
mod tests;
