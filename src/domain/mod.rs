//! Domain normalizers and the contract they share.
//!
//! Each normalizer decides whether a raw input is a valid instance of its
//! domain type, converts it to a canonical value, and renders canonical
//! values back to display strings.

pub mod email;
pub mod geo;
pub mod phone;
pub mod time_flag;

pub use email::{EmailChecker, EmailNormalizer, EmailOptions, SyntaxEmailChecker};
pub use geo::{GeoNormalizer, GeoPoint};
pub use phone::{PhoneComponents, PhoneNormalizer, PhoneNumber, PhoneOptions};
pub use time_flag::{Clock, TimeFlagNormalizer, TimeFlagOptions};

use crate::error::NormalizeResult;
use crate::value::RawValue;

/// The parse/filter/format contract every normalizer implements.
///
/// - `parse` is strict: recognized-empty input yields `Ok(None)`, any
///   structural violation fails the whole call.
/// - `filter` is lenient and never fails: invalid input collapses to the
///   normalizer's empty value, invalid list elements are dropped.
/// - `format` renders canonical or raw input for display.
pub trait ValueNormalizer: Send + Sync {
    /// Canonical representation.
    type Value;

    /// Result of lenient filtering.
    type Filtered;

    fn parse(&self, raw: &RawValue) -> NormalizeResult<Option<Self::Value>>;
    fn filter(&self, raw: &RawValue) -> Self::Filtered;
    fn format(&self, raw: &RawValue) -> NormalizeResult<String>;

    /// Short name used in logs and on the command line.
    fn name(&self) -> &'static str;
}
