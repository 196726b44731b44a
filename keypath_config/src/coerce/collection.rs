//! Collection coercion for one-dimensional list leaves.
//!
//! Sources encode lists in several ways: native arrays, bracketed text such
//! as `["a", "b"]`, plain comma-separated text, or a single bare value. The
//! decoder tries them in that order.

use super::coerce_scalar;
use crate::{CoercionError, RawValue, Scalar, ScalarKind};

/// Coerce `raw` into a list of `element` scalars.
///
/// Precedence:
/// 1. a native list coerces each element in turn;
/// 2. bracketed text with a string element kind splits its interior on
///    commas, trimming each item and removing one layer of matching quotes;
/// 3. other text with a string element kind splits on commas and trims;
/// 4. anything else becomes a single-element list.
///
/// # Errors
///
/// Returns [`CoercionError::Element`] wrapping the first element that fails
/// scalar coercion.
///
/// # Examples
///
/// ```
/// use keypath_config::{RawValue, Scalar, ScalarKind, coerce_list};
///
/// let hosts = coerce_list(&RawValue::from("[a, 'b']"), ScalarKind::String);
/// assert_eq!(
///     hosts,
///     Ok(vec![Scalar::String("a".into()), Scalar::String("b".into())])
/// );
/// ```
pub fn coerce_list(raw: &RawValue, element: ScalarKind) -> Result<Vec<Scalar>, CoercionError> {
    if let RawValue::List(items) = raw {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                coerce_scalar(item, element).map_err(|source| element_error(index, source))
            })
            .collect();
    }

    if let (RawValue::String(text), ScalarKind::String) = (raw, element) {
        if let Some(interior) = bracketed(text.trim()) {
            return Ok(split_bracketed(interior));
        }
        return Ok(text
            .split(',')
            .map(|item| Scalar::String(item.trim().to_owned()))
            .collect());
    }

    coerce_scalar(raw, element)
        .map(|scalar| vec![scalar])
        .map_err(|source| element_error(0, source))
}

fn bracketed(text: &str) -> Option<&str> {
    text.strip_prefix('[')?.strip_suffix(']')
}

fn split_bracketed(interior: &str) -> Vec<Scalar> {
    let content = interior.trim();
    if content.is_empty() {
        return Vec::new();
    }
    content
        .split(',')
        .map(|item| Scalar::String(unquote(item.trim()).to_owned()))
        .collect()
}

/// Strips one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(value)
}

fn element_error(index: usize, source: CoercionError) -> CoercionError {
    CoercionError::Element {
        index,
        source: Box::new(source),
    }
}
