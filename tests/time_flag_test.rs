//! Time flag normalizer behavior tests.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::*;
use fieldnorm::{ErrorKind, RawValue, TimeFlagNormalizer, TimeFlagOptions, ValueNormalizer};

fn frozen() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 7, 4, 9, 30, 0).unwrap()
}

fn flags() -> TimeFlagNormalizer {
    TimeFlagNormalizer::with_clock(TimeFlagOptions::default(), frozen)
}

#[test]
fn test_recognized_empty() {
    let normalizer = flags();
    for raw in recognized_empty_inputs() {
        assert_parses_empty(normalizer.parse(&raw));
        assert_eq!(normalizer.format(&raw).unwrap(), "");
    }
}

#[test]
fn test_truthy_stamps_now() {
    let normalizer = flags();
    for raw in [
        RawValue::from(true),
        RawValue::from(1),
        RawValue::from(1.0),
        RawValue::from("true"),
        RawValue::from(" yes "),
    ] {
        assert_eq!(
            normalizer.format(&raw).unwrap(),
            "2021-07-04 09:30:00",
            "raw: {raw:?}"
        );
    }
}

#[test]
fn test_custom_format() {
    let normalizer = TimeFlagNormalizer::with_clock(
        TimeFlagOptions {
            format: "%d.%m.%Y".to_string(),
        },
        frozen,
    );
    assert_eq!(normalizer.format(&RawValue::from("on")).unwrap(), "04.07.2021");
}

#[test]
fn test_unix_timestamp() {
    assert_eq!(
        flags().format(&RawValue::from(1_000_000_000)).unwrap(),
        "2001-09-09 01:46:40"
    );
}

#[test]
fn test_rfc3339_converted_to_utc() {
    assert_eq!(
        flags()
            .format(&RawValue::from("2020-01-01T03:00:00+03:00"))
            .unwrap(),
        "2020-01-01 00:00:00"
    );
}

#[test]
fn test_unparseable_date() {
    assert_error_kind(
        flags().parse(&RawValue::from("next tuesday-ish")),
        ErrorKind::UnrecognizedDate,
    );
    assert_eq!(flags().filter(&RawValue::from("next tuesday-ish")), None);
}

#[test]
fn test_pre_epoch_date_rejected() {
    assert_error_kind(
        flags().parse(&RawValue::from("1969-12-31")),
        ErrorKind::UnrecognizedDate,
    );
}

#[test]
fn test_list_rejected() {
    assert_error_kind(
        flags().parse(&RawValue::from(vec!["1"])),
        ErrorKind::InvalidType,
    );
}
