//! [`Bind`] implementations for primitive leaves and scalar collections.

use super::{Bind, ScalarKind, Shape, ValueKind};
use crate::{CoercionError, Scalar, Value};

/// A primitive type that can be built from a coerced [`Scalar`].
///
/// Every `ScalarLeaf` is a [`Bind`] leaf, and so is `Vec<T>` of one.
///
/// Integers are coerced through `i64` before narrowing, so `u64`, `u128`, and
/// `usize` fields only accept values up to `i64::MAX`.
pub trait ScalarLeaf: Sized {
    /// Kind the coercer must produce for this type.
    const KIND: ScalarKind;

    /// Narrow `scalar` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] when the scalar has the wrong kind or does
    /// not fit into `Self`.
    fn from_scalar(scalar: Scalar) -> Result<Self, CoercionError>;
}

const fn scalar_name(scalar: &Scalar) -> &'static str {
    match scalar {
        Scalar::String(_) => "string",
        Scalar::Integer(_) => "integer",
        Scalar::Float(_) => "float",
        Scalar::Bool(_) => "bool",
    }
}

fn mismatch(expected: ValueKind, found: &'static str) -> CoercionError {
    CoercionError::Mismatch { expected, found }
}

impl ScalarLeaf for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn from_scalar(scalar: Scalar) -> Result<Self, CoercionError> {
        match scalar {
            Scalar::String(text) => Ok(text),
            other => Err(mismatch(
                ValueKind::Scalar(Self::KIND),
                scalar_name(&other),
            )),
        }
    }
}

impl ScalarLeaf for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn from_scalar(scalar: Scalar) -> Result<Self, CoercionError> {
        match scalar {
            Scalar::Bool(flag) => Ok(flag),
            other => Err(mismatch(
                ValueKind::Scalar(Self::KIND),
                scalar_name(&other),
            )),
        }
    }
}

macro_rules! integer_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScalarLeaf for $ty {
                const KIND: ScalarKind = ScalarKind::Integer;

                fn from_scalar(scalar: Scalar) -> Result<Self, CoercionError> {
                    match scalar {
                        Scalar::Integer(number) => {
                            <$ty>::try_from(number).map_err(|_| CoercionError::OutOfRange {
                                value: number.to_string(),
                                target: stringify!($ty),
                            })
                        }
                        other => Err(mismatch(
                            ValueKind::Scalar(Self::KIND),
                            scalar_name(&other),
                        )),
                    }
                }
            }
        )*
    };
}

integer_leaf!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ScalarLeaf for f64 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn from_scalar(scalar: Scalar) -> Result<Self, CoercionError> {
        match scalar {
            Scalar::Float(number) => Ok(number),
            other => Err(mismatch(
                ValueKind::Scalar(Self::KIND),
                scalar_name(&other),
            )),
        }
    }
}

impl ScalarLeaf for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "range is checked before narrowing; precision loss is accepted"
    )]
    fn from_scalar(scalar: Scalar) -> Result<Self, CoercionError> {
        match scalar {
            Scalar::Float(number) => {
                if number.is_finite() && number.abs() > f64::from(Self::MAX) {
                    return Err(CoercionError::OutOfRange {
                        value: number.to_string(),
                        target: "f32",
                    });
                }
                Ok(number as Self)
            }
            other => Err(mismatch(
                ValueKind::Scalar(Self::KIND),
                scalar_name(&other),
            )),
        }
    }
}

macro_rules! scalar_bind {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bind for $ty {
                fn shape(&self) -> Shape {
                    Shape::Leaf(ValueKind::Scalar(<$ty as ScalarLeaf>::KIND))
                }

                fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
                    match value {
                        Value::Scalar(scalar) => {
                            *self = <$ty as ScalarLeaf>::from_scalar(scalar)?;
                            Ok(())
                        }
                        Value::List(_) => Err(mismatch(
                            ValueKind::Scalar(<$ty as ScalarLeaf>::KIND),
                            "list",
                        )),
                    }
                }
            }
        )*
    };
}

scalar_bind!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: ScalarLeaf> Bind for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::Leaf(ValueKind::List(T::KIND))
    }

    fn assign(&mut self, value: Value) -> Result<(), CoercionError> {
        let Value::List(items) = value else {
            return Err(mismatch(ValueKind::List(T::KIND), "scalar"));
        };
        let converted = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_scalar(item).map_err(|source| CoercionError::Element {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Self, _>>()?;
        *self = converted;
        Ok(())
    }
}
