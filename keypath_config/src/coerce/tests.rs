//! Unit tests for scalar and collection coercion.

use super::{coerce_list, coerce_scalar, coerce_value};
use crate::{CoercionError, RawValue, Scalar, ScalarKind, Value, ValueKind};
use rstest::rstest;

fn strings(items: &[&str]) -> Vec<Scalar> {
    items
        .iter()
        .map(|item| Scalar::String((*item).to_owned()))
        .collect()
}

#[rstest]
#[case::native(RawValue::Integer(42), 42)]
#[case::text(RawValue::from("42"), 42)]
#[case::padded_text(RawValue::from(" -7 "), -7)]
#[case::float_truncates(RawValue::Float(42.9), 42)]
#[case::negative_float_truncates(RawValue::Float(-3.7), -3)]
fn coerces_integers(#[case] raw: RawValue, #[case] expected: i64) {
    assert_eq!(
        coerce_scalar(&raw, ScalarKind::Integer),
        Ok(Scalar::Integer(expected))
    );
}

#[rstest]
#[case(RawValue::from("abc"))]
#[case(RawValue::from("4.2"))]
#[case(RawValue::Bool(true))]
#[case(RawValue::List(vec![RawValue::Integer(1)]))]
fn rejects_invalid_integer_text(#[case] raw: RawValue) {
    assert!(matches!(
        coerce_scalar(&raw, ScalarKind::Integer),
        Err(CoercionError::Parse {
            kind: ScalarKind::Integer,
            ..
        })
    ));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(1.0e19)]
fn rejects_floats_outside_i64(#[case] number: f64) {
    assert!(matches!(
        coerce_scalar(&RawValue::Float(number), ScalarKind::Integer),
        Err(CoercionError::OutOfRange { target: "i64", .. })
    ));
}

#[rstest]
#[case::native(RawValue::Float(1.5), 1.5)]
#[case::integer(RawValue::Integer(3), 3.0)]
#[case::text(RawValue::from("2.25"), 2.25)]
#[case::exponent(RawValue::from("1e3"), 1000.0)]
fn coerces_floats(#[case] raw: RawValue, #[case] expected: f64) {
    match coerce_scalar(&raw, ScalarKind::Float) {
        Ok(Scalar::Float(actual)) => assert!((actual - expected).abs() < f64::EPSILON),
        other => panic!("expected float {expected}, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_float_text() {
    assert!(matches!(
        coerce_scalar(&RawValue::from("fast"), ScalarKind::Float),
        Err(CoercionError::Parse {
            kind: ScalarKind::Float,
            ..
        })
    ));
}

#[rstest]
#[case(RawValue::from("TRUE"), true)]
#[case(RawValue::from("1"), true)]
#[case(RawValue::from("false"), false)]
#[case(RawValue::from("0"), false)]
#[case(RawValue::from("  True  "), true)]
#[case(RawValue::Bool(false), false)]
#[case(RawValue::Integer(1), true)]
#[case(RawValue::Integer(0), false)]
fn coerces_booleans(#[case] raw: RawValue, #[case] expected: bool) {
    assert_eq!(coerce_scalar(&raw, ScalarKind::Bool), Ok(Scalar::Bool(expected)));
}

#[rstest]
#[case(RawValue::from("maybe"))]
#[case(RawValue::from("yes"))]
#[case(RawValue::Integer(2))]
fn rejects_other_boolean_text(#[case] raw: RawValue) {
    assert!(matches!(
        coerce_scalar(&raw, ScalarKind::Bool),
        Err(CoercionError::Parse {
            kind: ScalarKind::Bool,
            ..
        })
    ));
}

#[rstest]
#[case(RawValue::from("verbatim "), "verbatim ")]
#[case(RawValue::Integer(8080), "8080")]
#[case(RawValue::Bool(true), "true")]
#[case(RawValue::Float(0.5), "0.5")]
fn strings_never_fail(#[case] raw: RawValue, #[case] expected: &str) {
    assert_eq!(
        coerce_scalar(&raw, ScalarKind::String),
        Ok(Scalar::String(expected.to_owned()))
    );
}

#[rstest]
#[case::native(RawValue::List(vec![RawValue::from("a"), RawValue::from("b")]))]
#[case::bracketed(RawValue::from("[a, b]"))]
#[case::quoted(RawValue::from(r#"["a", 'b']"#))]
#[case::padded_brackets(RawValue::from("  [a,b]  "))]
#[case::csv(RawValue::from("a,b"))]
#[case::spaced_csv(RawValue::from("a, b"))]
fn string_list_encodings_are_equivalent(#[case] raw: RawValue) {
    assert_eq!(coerce_list(&raw, ScalarKind::String), Ok(strings(&["a", "b"])));
}

#[rstest]
#[case("[]")]
#[case("[   ]")]
fn empty_brackets_yield_empty_list(#[case] text: &str) {
    assert_eq!(
        coerce_list(&RawValue::from(text), ScalarKind::String),
        Ok(Vec::new())
    );
}

#[test]
fn csv_items_keep_their_quotes() {
    assert_eq!(
        coerce_list(&RawValue::from(r#""a", b"#), ScalarKind::String),
        Ok(strings(&["\"a\"", "b"]))
    );
}

#[test]
fn bracket_unquoting_removes_only_one_matching_layer() {
    assert_eq!(
        coerce_list(&RawValue::from(r#"[""a"", 'b"]"#), ScalarKind::String),
        Ok(strings(&["\"a\"", "'b\""]))
    );
}

#[rstest]
#[case::integer(RawValue::Integer(7), ScalarKind::Integer, Scalar::Integer(7))]
#[case::text_integer(RawValue::from("7"), ScalarKind::Integer, Scalar::Integer(7))]
#[case::boolean(RawValue::Bool(true), ScalarKind::Bool, Scalar::Bool(true))]
#[case::number_as_string(RawValue::Integer(7), ScalarKind::String, Scalar::String("7".into()))]
fn promotes_single_scalars(
    #[case] raw: RawValue,
    #[case] element: ScalarKind,
    #[case] expected: Scalar,
) {
    assert_eq!(coerce_list(&raw, element), Ok(vec![expected]));
}

#[test]
fn bracketed_text_is_not_split_for_non_string_elements() {
    let err = coerce_list(&RawValue::from("[1, 2]"), ScalarKind::Integer);
    assert!(matches!(err, Err(CoercionError::Element { index: 0, .. })));
}

#[test]
fn native_list_failures_report_the_element_index() {
    let raw = RawValue::List(vec![
        RawValue::Integer(1),
        RawValue::from("2"),
        RawValue::from("three"),
    ]);
    match coerce_list(&raw, ScalarKind::Integer) {
        Err(CoercionError::Element { index, source }) => {
            assert_eq!(index, 2);
            assert!(matches!(*source, CoercionError::Parse { .. }));
        }
        other => panic!("expected element failure, got {other:?}"),
    }
}

#[test]
fn native_lists_coerce_mixed_elements() {
    let raw = RawValue::List(vec![RawValue::Integer(1), RawValue::from("2"), RawValue::Float(3.9)]);
    assert_eq!(
        coerce_list(&raw, ScalarKind::Integer),
        Ok(vec![Scalar::Integer(1), Scalar::Integer(2), Scalar::Integer(3)])
    );
}

#[test]
fn unsupported_kinds_are_reported() {
    assert_eq!(
        coerce_value(&RawValue::from("x"), ValueKind::Unsupported("Option<u8>")),
        Err(CoercionError::UnsupportedKind { kind: "Option<u8>" })
    );
}

#[test]
fn dispatches_by_value_kind() {
    assert_eq!(
        coerce_value(&RawValue::from("a,b"), ValueKind::List(ScalarKind::String)),
        Ok(Value::List(strings(&["a", "b"])))
    );
    assert_eq!(
        coerce_value(&RawValue::from("a,b"), ValueKind::Scalar(ScalarKind::String)),
        Ok(Value::Scalar(Scalar::String("a,b".into())))
    );
}
