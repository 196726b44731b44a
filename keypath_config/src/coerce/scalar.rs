//! Scalar coercion with text fallback parsing.

use crate::{CoercionError, RawValue, Scalar, ScalarKind};

/// Bounds of `i64` as floats (-2^63 inclusive, 2^63 exclusive).
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Coerce `raw` into a scalar of `kind`.
///
/// Native representations are accepted directly. Anything else is rendered
/// to text and parsed, so `"42"`, `42`, and `42.9` all become the integer
/// `42`.
///
/// # Errors
///
/// Returns [`CoercionError::Parse`] when the text is not a valid literal for
/// `kind`, or [`CoercionError::OutOfRange`] for floats outside `i64` when an
/// integer is requested. String coercion never fails.
pub fn coerce_scalar(raw: &RawValue, kind: ScalarKind) -> Result<Scalar, CoercionError> {
    match kind {
        ScalarKind::String => Ok(Scalar::String(render(raw))),
        ScalarKind::Integer => coerce_integer(raw).map(Scalar::Integer),
        ScalarKind::Float => coerce_float(raw).map(Scalar::Float),
        ScalarKind::Bool => coerce_bool(raw).map(Scalar::Bool),
    }
}

fn render(raw: &RawValue) -> String {
    raw.as_str()
        .map_or_else(|| raw.to_string(), ToOwned::to_owned)
}

fn coerce_integer(raw: &RawValue) -> Result<i64, CoercionError> {
    match raw {
        RawValue::Integer(number) => Ok(*number),
        RawValue::Float(number) => truncate(*number),
        other => parse_integer(&render(other)),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the truncated value is range-checked against i64 first"
)]
fn truncate(number: f64) -> Result<i64, CoercionError> {
    let truncated = number.trunc();
    if truncated.is_finite() && truncated >= I64_LOWER && truncated < I64_UPPER {
        Ok(truncated as i64)
    } else {
        Err(CoercionError::OutOfRange {
            value: number.to_string(),
            target: "i64",
        })
    }
}

fn parse_integer(text: &str) -> Result<i64, CoercionError> {
    text.trim()
        .parse()
        .map_err(|_| parse_error(text, ScalarKind::Integer))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integers beyond 2^53 round to the nearest float"
)]
fn coerce_float(raw: &RawValue) -> Result<f64, CoercionError> {
    match raw {
        RawValue::Float(number) => Ok(*number),
        RawValue::Integer(number) => Ok(*number as f64),
        other => parse_float(&render(other)),
    }
}

fn parse_float(text: &str) -> Result<f64, CoercionError> {
    text.trim()
        .parse()
        .map_err(|_| parse_error(text, ScalarKind::Float))
}

fn coerce_bool(raw: &RawValue) -> Result<bool, CoercionError> {
    match raw {
        RawValue::Bool(flag) => Ok(*flag),
        other => parse_bool(&render(other)),
    }
}

fn parse_bool(text: &str) -> Result<bool, CoercionError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(parse_error(text, ScalarKind::Bool)),
    }
}

fn parse_error(text: &str, kind: ScalarKind) -> CoercionError {
    CoercionError::Parse {
        value: text.to_owned(),
        kind,
    }
}
