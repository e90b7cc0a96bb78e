//! Raw input fixtures shared across normalizer tests.

use fieldnorm::RawValue;

/// Every recognized-empty input.
pub fn recognized_empty_inputs() -> Vec<RawValue> {
    vec![
        RawValue::Null,
        RawValue::from(""),
        RawValue::from("0"),
        RawValue::from(0),
        RawValue::from(0.0),
        RawValue::from(false),
        RawValue::List(vec![]),
    ]
}

/// Inputs that are odd in shape; no normalizer may panic on them.
pub fn awkward_inputs() -> Vec<RawValue> {
    vec![
        RawValue::from(" "),
        RawValue::from("a"),
        RawValue::from("5".repeat(1000)),
        RawValue::from("(".repeat(100)),
        RawValue::from("🔢📱☎️"),
        RawValue::from("\n\r\t"),
        RawValue::from(",;,;"),
        RawValue::from(true),
        RawValue::from(-1),
        RawValue::from(i64::MAX),
        RawValue::from(f64::NAN),
        RawValue::from(1.5e300),
        RawValue::List(vec![RawValue::Null]),
        RawValue::List(vec![RawValue::List(vec![]), RawValue::List(vec![])]),
        RawValue::from(vec!["a", "b", "c"]),
    ]
}

/// Phone inputs that parse, paired with their canonical value.
pub fn valid_phones() -> Vec<(&'static str, u64)> {
    vec![
        ("123-4567", 1234567),
        ("123 45 67", 1234567),
        ("(495) 123-45-67", 4951234567),
        ("+7 (495) 123-45-67", 74951234567),
        ("+38 (044) 123-45-67", 380441234567),
        ("  8-800-555-35-35 ", 88005553535),
    ]
}
