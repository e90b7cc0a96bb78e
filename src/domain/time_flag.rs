//! Boolean flag / timestamp coercion.
//!
//! Used for nullable datetime columns such as `published` or `disabled`:
//! falsy tokens clear the field, truthy tokens stamp the current time, and
//! anything else is read as a timestamp.

use super::ValueNormalizer;
use crate::error::{NormalizeError, NormalizeResult};
use crate::value::RawValue;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Source of "now".
pub type Clock = fn() -> DateTime<Utc>;

const FALSY: &[&str] = &["", "0", "no", "false", "off"];
const TRUTHY: &[&str] = &["1", "yes", "true", "on"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFlagOptions {
    /// chrono format string for rendered timestamps
    pub format: String,
}

impl TimeFlagOptions {
    /// Rejects format strings containing unknown specifiers.
    pub fn validate(&self) -> NormalizeResult<()> {
        if StrftimeItems::new(&self.format).any(|item| matches!(item, Item::Error)) {
            return Err(NormalizeError::invalid_argument(
                "format",
                format!("invalid timestamp format '{}'", self.format),
            ));
        }
        Ok(())
    }
}

impl Default for TimeFlagOptions {
    fn default() -> Self {
        Self {
            format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

/// Flag-or-timestamp normalizer. Times are rendered in UTC.
#[derive(Debug, Clone)]
pub struct TimeFlagNormalizer {
    options: TimeFlagOptions,
    clock: Clock,
}

impl TimeFlagNormalizer {
    pub fn new(options: TimeFlagOptions) -> Self {
        Self::with_clock(options, Utc::now)
    }

    pub fn with_clock(options: TimeFlagOptions, clock: Clock) -> Self {
        Self { options, clock }
    }

    fn render(&self, time: DateTime<Utc>) -> NormalizeResult<String> {
        let mut out = String::new();
        write!(out, "{}", time.format(&self.options.format)).map_err(|_| {
            NormalizeError::invalid_argument(
                "format",
                format!("invalid timestamp format '{}'", self.options.format),
            )
        })?;
        Ok(out)
    }

    fn from_timestamp(&self, seconds: i64, original: &RawValue) -> NormalizeResult<Option<String>> {
        match seconds {
            0 => Ok(None),
            1 => self.render((self.clock)()).map(Some),
            n => Utc
                .timestamp_opt(n, 0)
                .single()
                .ok_or_else(|| NormalizeError::UnrecognizedDate {
                    value: original.to_string(),
                })
                .and_then(|t| self.render(t))
                .map(Some),
        }
    }

    fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(t) = DateTime::parse_from_rfc3339(text) {
            return Some(t.with_timezone(&Utc));
        }
        if let Ok(t) = DateTime::parse_from_rfc2822(text) {
            return Some(t.with_timezone(&Utc));
        }
        if let Some(t) = DATETIME_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        {
            return Some(t.and_utc());
        }
        DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc())
    }

    fn parse_text(&self, raw: &RawValue, text: &str) -> NormalizeResult<Option<String>> {
        let token = text.trim();
        let lowered = token.to_ascii_lowercase();

        if FALSY.contains(&lowered.as_str()) {
            return Ok(None);
        }
        if TRUTHY.contains(&lowered.as_str()) {
            return self.render((self.clock)()).map(Some);
        }
        if let Ok(n) = token.parse::<i64>() {
            return self.from_timestamp(n, raw);
        }
        if let Ok(x) = token.parse::<f64>() {
            if x.is_finite() {
                return self.from_timestamp(x.trunc() as i64, raw);
            }
        }

        match Self::parse_date_text(token) {
            Some(t) if t.timestamp() > 0 => self.render(t).map(Some),
            _ => Err(NormalizeError::UnrecognizedDate {
                value: token.to_string(),
            }),
        }
    }
}

impl Default for TimeFlagNormalizer {
    fn default() -> Self {
        Self::new(TimeFlagOptions::default())
    }
}

impl ValueNormalizer for TimeFlagNormalizer {
    type Value = String;
    type Filtered = Option<String>;

    fn parse(&self, raw: &RawValue) -> NormalizeResult<Option<String>> {
        if raw.is_recognized_empty() {
            return Ok(None);
        }

        match raw {
            RawValue::Bool(_) => self.render((self.clock)()).map(Some),
            RawValue::Int(n) => self.from_timestamp(*n, raw),
            RawValue::Float(x) if x.is_finite() => self.from_timestamp(x.trunc() as i64, raw),
            RawValue::Str(s) => self.parse_text(raw, s),
            other => Err(NormalizeError::invalid_type(other.type_name())),
        }
    }

    fn filter(&self, raw: &RawValue) -> Option<String> {
        self.parse(raw).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "dropping invalid flag value");
            None
        })
    }

    fn format(&self, raw: &RawValue) -> NormalizeResult<String> {
        Ok(self.parse(raw)?.unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "time-flag"
    }
}
