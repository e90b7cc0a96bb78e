//! Geographic coordinate domain logic.

use super::ValueNormalizer;
use crate::error::{NormalizeError, NormalizeResult};
use crate::value::RawValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, kept in input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        point.to_array()
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<GeoPoint> for RawValue {
    fn from(point: GeoPoint) -> Self {
        RawValue::List(vec![
            RawValue::Float(point.latitude),
            RawValue::Float(point.longitude),
        ])
    }
}

/// Signed decimal without exponent; `NaN` and `inf` are not numbers here.
const NUMBER: &str = r"[-+]?[0-9]+(?:\.[0-9]+)?";

fn coordinates_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(r"^\s*({NUMBER})[,\s]+({NUMBER})\s*$", NUMBER = NUMBER))
            .expect("Valid coordinates regex")
    });
    &PATTERN
}

fn number_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(r"^{NUMBER}$", NUMBER = NUMBER)).expect("Valid coordinate regex")
    });
    &PATTERN
}

/// Geo coordinate normalizer. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoNormalizer;

impl GeoNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn coordinate(item: &RawValue) -> NormalizeResult<f64> {
        match item {
            RawValue::Int(n) => Ok(*n as f64),
            RawValue::Float(x) if x.is_finite() => Ok(*x),
            RawValue::Float(x) => Err(NormalizeError::malformed(
                x.to_string(),
                "coordinate is not a number",
            )),
            RawValue::Str(s) => {
                let text = s.trim();
                if !number_regex().is_match(text) {
                    return Err(NormalizeError::malformed(s.as_str(), "coordinate is not a number"));
                }
                text.parse::<f64>()
                    .map_err(|_| NormalizeError::malformed(s.as_str(), "coordinate is not a number"))
            }
            other => Err(NormalizeError::invalid_type(other.type_name())),
        }
    }

    fn parse_text(text: &str) -> NormalizeResult<GeoPoint> {
        let caps = coordinates_regex().captures(text).ok_or_else(|| {
            NormalizeError::malformed(text, "expected two comma separated coordinates")
        })?;

        let latitude = caps[1]
            .parse()
            .map_err(|_| NormalizeError::malformed(text, "latitude is not a number"))?;
        let longitude = caps[2]
            .parse()
            .map_err(|_| NormalizeError::malformed(text, "longitude is not a number"))?;

        Ok(GeoPoint::new(latitude, longitude))
    }

    fn parse_list(items: &[RawValue]) -> NormalizeResult<GeoPoint> {
        match items {
            [latitude, longitude] => Ok(GeoPoint::new(
                Self::coordinate(latitude)?,
                Self::coordinate(longitude)?,
            )),
            _ => Err(NormalizeError::WrongElementCount {
                expected: 2,
                found: items.len(),
            }),
        }
    }
}

impl ValueNormalizer for GeoNormalizer {
    type Value = GeoPoint;
    type Filtered = Option<GeoPoint>;

    fn parse(&self, raw: &RawValue) -> NormalizeResult<Option<GeoPoint>> {
        if raw.is_recognized_empty() {
            return Ok(None);
        }

        match raw {
            RawValue::List(items) => Self::parse_list(items).map(Some),
            other => Self::parse_text(&other.to_string()).map(Some),
        }
    }

    fn filter(&self, raw: &RawValue) -> Option<GeoPoint> {
        self.parse(raw).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "dropping invalid coordinates");
            None
        })
    }

    /// Only a two-element list is accepted; anything else is caller misuse.
    fn format(&self, raw: &RawValue) -> NormalizeResult<String> {
        match raw {
            RawValue::List(items) if items.len() == 2 && items.iter().all(RawValue::is_scalar) => {
                Ok(format!("{}, {}", items[0], items[1]))
            }
            other => Err(NormalizeError::invalid_argument(
                "value",
                format!("expected a two-element coordinate array, found {}", other.type_name()),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "geo"
    }
}
