//! Geo coordinate normalizer behavior tests.

mod common;

use common::*;
use fieldnorm::{ErrorKind, GeoNormalizer, GeoPoint, NormalizeError, RawValue, ValueNormalizer};

#[test]
fn test_parse_string() {
    assert_eq!(
        GeoNormalizer::new()
            .parse(&RawValue::from("55.75, 37.61"))
            .unwrap(),
        Some(GeoPoint::new(55.75, 37.61))
    );
}

#[test]
fn test_parse_whitespace_separator() {
    assert_eq!(
        GeoNormalizer::new()
            .parse(&RawValue::from("55.75 37.61"))
            .unwrap(),
        Some(GeoPoint::new(55.75, 37.61))
    );
}

#[test]
fn test_parse_negative() {
    let point = GeoNormalizer::new()
        .parse(&RawValue::from("-33.8688,151.2093"))
        .unwrap()
        .unwrap();
    assert_eq!(point.to_array(), [-33.8688, 151.2093]);
}

#[test]
fn test_parse_array_keeps_order() {
    let point = GeoNormalizer::new()
        .parse(&RawValue::from(vec![37.61, 55.75]))
        .unwrap()
        .unwrap();
    assert_eq!(point.latitude, 37.61);
    assert_eq!(point.longitude, 55.75);
}

#[test]
fn test_parse_array_coerces_elements() {
    let raw = RawValue::List(vec![RawValue::from("55.75"), RawValue::from(37)]);
    assert_eq!(
        GeoNormalizer::new().parse(&raw).unwrap(),
        Some(GeoPoint::new(55.75, 37.0))
    );
}

#[test]
fn test_wrong_element_count() {
    let err = GeoNormalizer::new()
        .parse(&RawValue::from(vec![1, 2, 3]))
        .unwrap_err();
    assert_eq!(
        err,
        NormalizeError::WrongElementCount {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_malformed_string() {
    for input in ["55.75", "55.75;37.61", "north, east", "1, 2, 3"] {
        assert_error_kind(
            GeoNormalizer::new().parse(&RawValue::from(input)),
            ErrorKind::MalformedSyntax,
        );
    }
}

#[test]
fn test_recognized_empty() {
    let normalizer = GeoNormalizer::new();
    for raw in recognized_empty_inputs() {
        assert_parses_empty(normalizer.parse(&raw));
        assert_eq!(normalizer.filter(&raw), None);
    }
}

#[test]
fn test_filter_swallows_errors() {
    let normalizer = GeoNormalizer::new();
    assert_eq!(normalizer.filter(&RawValue::from(vec![1, 2, 3])), None);
    assert_eq!(
        normalizer.filter(&RawValue::from("1.5, 2.5")),
        Some(GeoPoint::new(1.5, 2.5))
    );
}

#[test]
fn test_format() {
    let normalizer = GeoNormalizer::new();
    assert_eq!(
        normalizer.format(&RawValue::from(vec![1.0, 2.0])).unwrap(),
        "1, 2"
    );
    assert_eq!(
        normalizer
            .format(&RawValue::from(GeoPoint::new(55.75, 37.61)))
            .unwrap(),
        "55.75, 37.61"
    );
}

#[test]
fn test_format_rejects_other_shapes() {
    let normalizer = GeoNormalizer::new();
    for raw in [
        RawValue::from("55.75, 37.61"),
        RawValue::Null,
        RawValue::from(vec![1.0]),
        RawValue::from(vec![1.0, 2.0, 3.0]),
    ] {
        assert_error_kind(normalizer.format(&raw), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_format_parse_round_trip() {
    let normalizer = GeoNormalizer::new();
    for input in ["55.75, 37.61", "1 2", "-0.5,10"] {
        let first = normalizer.parse(&RawValue::from(input)).unwrap().unwrap();
        let shown = normalizer.format(&RawValue::from(first)).unwrap();
        let second = normalizer.parse(&RawValue::from(shown)).unwrap().unwrap();
        assert_eq!(first, second, "input: {input}");
    }
}

#[test]
fn test_array_strings_use_decimal_grammar() {
    let normalizer = GeoNormalizer::new();
    for text in ["NaN", "inf", "-infinity", "1e5"] {
        let raw = RawValue::List(vec![RawValue::from(text), RawValue::from("2")]);
        assert_error_kind(normalizer.parse(&raw), ErrorKind::MalformedSyntax);
        assert_eq!(normalizer.filter(&raw), None);
    }
}

#[test]
fn test_non_finite_float_rejected() {
    let raw = RawValue::List(vec![RawValue::Float(f64::NAN), RawValue::from(1.0)]);
    assert_error_kind(GeoNormalizer::new().parse(&raw), ErrorKind::MalformedSyntax);
}
