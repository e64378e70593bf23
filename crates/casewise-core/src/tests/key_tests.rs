//! Tests for subject stringification.

use rstest::rstest;
use serde::Serialize;
use serde_json::json;

use crate::{case_key, describe, field_key};

#[derive(Serialize)]
struct Shape {
    kind: &'static str,
    radius: f64,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum Event {
    Click { x: i32 },
    Close,
}

#[rstest]
#[case::integer(json!(404), "404")]
#[case::negative(json!(-5), "-5")]
#[case::integral_float(json!(2.0), "2")]
#[case::fraction(json!(2.5), "2.5")]
#[case::text(json!("circle"), "circle")]
#[case::boolean(json!(true), "true")]
#[case::null(json!(null), "null")]
#[case::object(json!({"a": 1}), "[object Object]")]
#[case::array(json!([1, null, "x"]), "1,,x")]
#[case::empty_array(json!([]), "")]
fn case_key_follows_string_conversion(#[case] subject: serde_json::Value, #[case] expected: &str) {
    assert_eq!(case_key(&subject), expected);
}

#[rstest]
#[case::nan(f64::NAN, "NaN")]
#[case::infinity(f64::INFINITY, "Infinity")]
#[case::negative_infinity(f64::NEG_INFINITY, "-Infinity")]
#[case::negative_zero(-0.0, "0")]
#[case::large_integral(1e20, "100000000000000000000")]
#[case::exponent_threshold(1e21, "1e+21")]
#[case::large_fraction(1.5e300, "1.5e+300")]
#[case::small_decimal(0.000_001, "0.000001")]
#[case::small_exponent(1e-7, "1e-7")]
#[case::negative_small(-2.5e-8, "-2.5e-8")]
fn float_edges_follow_number_formatting(#[case] subject: f64, #[case] expected: &str) {
    assert_eq!(case_key(&subject), expected);
}

#[test]
fn non_finite_floats_do_not_collide_with_null() {
    assert_ne!(case_key(&f64::INFINITY), case_key(&Option::<f64>::None));
    assert_ne!(case_key(&f64::NAN), "null");
}

#[test]
fn single_precision_keeps_its_shortest_form() {
    assert_eq!(case_key(&0.1_f32), "0.1");
    assert_eq!(case_key(&f32::NEG_INFINITY), "-Infinity");
}

#[test]
fn native_sequences_join_elements() {
    assert_eq!(case_key(&[Some(1.5), None, Some(f64::NAN)]), "1.5,,NaN");
    assert_eq!(case_key(&(1, "a", true)), "1,a,true");
}

#[test]
fn numeric_and_text_keys_collide() {
    assert_eq!(case_key(&1), case_key(&"1"));
}

#[test]
fn unit_variants_use_their_name() {
    #[derive(Serialize)]
    enum Light {
        Red,
    }
    assert_eq!(case_key(&Light::Red), "Red");
}

#[test]
fn field_key_reads_struct_field() {
    let shape = Shape {
        kind: "circle",
        radius: 5.0,
    };
    assert_eq!(field_key(&shape, "kind"), "circle");
    assert_eq!(field_key(&shape, "radius"), "5");
    assert_eq!(field_key(&shape, "sides"), "undefined");
}

#[test]
fn field_key_keeps_non_finite_fields() {
    let shape = Shape {
        kind: "line",
        radius: f64::INFINITY,
    };
    assert_eq!(field_key(&shape, "radius"), "Infinity");
}

#[test]
fn field_key_of_null_field_is_null() {
    assert_eq!(field_key(&json!({"kind": null}), "kind"), "null");
}

#[test]
fn field_key_of_sequence_is_undefined() {
    assert_eq!(field_key(&json!(["kind"]), "kind"), "undefined");
}

#[test]
fn field_key_reads_internal_tag() {
    assert_eq!(field_key(&Event::Click { x: 1 }, "type"), "Click");
    assert_eq!(field_key(&Event::Close, "type"), "Close");
}

#[test]
fn field_key_of_primitive_is_undefined() {
    assert_eq!(field_key(&7, "kind"), "undefined");
}

#[test]
fn describe_renders_json() {
    assert_eq!(describe(&-5), "-5");
    assert_eq!(describe(&"hi"), r#""hi""#);
    assert_eq!(describe(&json!({"kind": "square"})), r#"{"kind":"square"}"#);
}

#[test]
fn describe_unserializable_is_undefined() {
    let mut map = std::collections::HashMap::new();
    map.insert((1, 2), "tuple keys are not valid JSON keys");
    assert_eq!(describe(&map), "undefined");
    assert_eq!(case_key(&map), "undefined");
}
