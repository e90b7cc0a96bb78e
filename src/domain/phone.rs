//! Phone number domain logic.
//!
//! Free-form phone text is validated character by character, reduced to its
//! digits and stored as an integer. Formatting re-derives a fixed 12-digit
//! layout from that integer and backfills country and region codes from the
//! configured defaults.

use super::ValueNormalizer;
use crate::error::{NormalizeError, NormalizeResult};
use crate::value::RawValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fewest digits accepted (a bare local number).
pub const MIN_DIGITS: usize = 7;

/// Most digits accepted.
pub const MAX_DIGITS: usize = 12;

/// Width of the positional layout: country(2) region(3) local(3+2+2).
pub const PADDED_WIDTH: usize = 12;

/// Default country and region codes applied when formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneOptions {
    pub country: u32,
    pub region: u32,
}

/// Canonical phone value: the numeric value of the cleaned digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Decimal digits without padding.
    pub fn digits(&self) -> String {
        self.0.to_string()
    }

    /// Splits the zero-padded 12-digit layout into its positional fields.
    ///
    /// The split is purely positional: leading zeros of a short number land
    /// in the country and region fields.
    pub fn components(&self) -> NormalizeResult<PhoneComponents> {
        let padded = format!("{:0>width$}", self.0, width = PADDED_WIDTH);

        let caps = layout_regex()
            .captures(&padded)
            .ok_or_else(|| NormalizeError::Internal(format!("unexpected phone layout: {}", padded)))?;

        // The pattern only matches ASCII digits, so these cannot fail.
        let country = caps[1].parse().unwrap_or_default();
        let region = caps[2].parse().unwrap_or_default();

        Ok(PhoneComponents {
            country,
            region,
            local: format!("{}-{}-{}", &caps[3], &caps[4], &caps[5]),
        })
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PhoneNumber> for RawValue {
    fn from(phone: PhoneNumber) -> Self {
        RawValue::from(phone.0)
    }
}

/// Positional fields of a padded phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneComponents {
    pub country: u32,
    pub region: u32,
    /// `DDD-DD-DD`
    pub local: String,
}

impl PhoneComponents {
    /// Substitutes configured defaults for zero country/region fields.
    pub fn with_defaults(mut self, options: &PhoneOptions) -> Self {
        if self.country == 0 {
            self.country = options.country;
        }
        if self.region == 0 {
            self.region = options.region;
        }
        self
    }

    /// Renders `+C (RRR) DDD-DD-DD`.
    ///
    /// The country is only emitted together with a region: a non-zero
    /// country with a zero region renders the local number alone.
    pub fn render(&self) -> String {
        if self.region == 0 {
            return self.local.clone();
        }

        let with_region = format!("({:03}) {}", self.region, self.local);
        if self.country == 0 {
            with_region
        } else {
            format!("+{} {}", self.country, with_region)
        }
    }
}

fn invalid_char_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^+0-9\s\-()]").expect("Valid phone character regex"));
    &PATTERN
}

fn layout_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(\d{2})(\d{3})(\d{3})(\d{2})(\d{2})$").expect("Valid phone layout regex")
    });
    &PATTERN
}

/// Phone number normalizer.
///
/// Accepts digits, whitespace and `+ - ( )`; anything else is rejected.
/// Between 7 and 12 digits are required.
#[derive(Debug, Clone, Default)]
pub struct PhoneNormalizer {
    options: PhoneOptions,
}

impl PhoneNormalizer {
    pub fn new(options: PhoneOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PhoneOptions {
        &self.options
    }

    /// Strict parsing of a raw value into a phone number.
    pub fn parse_phone(raw: &RawValue) -> NormalizeResult<Option<PhoneNumber>> {
        if raw.is_recognized_empty() {
            return Ok(None);
        }

        if !raw.is_scalar() {
            return Err(NormalizeError::invalid_type(raw.type_name()));
        }

        let text = raw.to_string();

        if let Some(m) = invalid_char_regex().find(&text) {
            // A match is never empty.
            let character = m.as_str().chars().next().unwrap_or_default();
            return Err(NormalizeError::InvalidCharacter { character });
        }

        // Cleaned as a string so leading zeros count toward the length.
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.is_empty() || digits == "0" {
            return Ok(None);
        }

        let length = digits.len();
        if length < MIN_DIGITS {
            return Err(NormalizeError::TooShort {
                length,
                min: MIN_DIGITS,
            });
        }
        if length > MAX_DIGITS {
            return Err(NormalizeError::TooLong {
                length,
                max: MAX_DIGITS,
            });
        }

        digits
            .parse::<u64>()
            .map(|n| Some(PhoneNumber(n)))
            .map_err(|e| NormalizeError::Internal(e.to_string()))
    }

    /// Renders a phone number with this normalizer's defaults.
    pub fn format_phone(&self, phone: PhoneNumber) -> NormalizeResult<String> {
        let components = phone.components()?;
        tracing::trace!(
            country = components.country,
            region = components.region,
            local = %components.local,
            "decomposed phone number"
        );
        Ok(components.with_defaults(&self.options).render())
    }
}

impl ValueNormalizer for PhoneNormalizer {
    type Value = PhoneNumber;
    type Filtered = Option<PhoneNumber>;

    fn parse(&self, raw: &RawValue) -> NormalizeResult<Option<PhoneNumber>> {
        Self::parse_phone(raw)
    }

    fn filter(&self, raw: &RawValue) -> Option<PhoneNumber> {
        match Self::parse_phone(raw) {
            Ok(phone) => phone,
            Err(err) => {
                tracing::debug!(error = %err, "dropping invalid phone number");
                None
            }
        }
    }

    /// Never fails on parse errors: unparseable input is returned verbatim.
    fn format(&self, raw: &RawValue) -> NormalizeResult<String> {
        match Self::parse_phone(raw) {
            Ok(Some(phone)) => self.format_phone(phone),
            Ok(None) => Ok(String::new()),
            Err(err) => {
                tracing::debug!(error = %err, "phone format falling back to raw input");
                Ok(raw.to_string())
            }
        }
    }

    fn name(&self) -> &'static str {
        "phone"
    }
}
