//! Field-value normalizers with a shared parse/filter/format contract.
//!
//! Each normalizer takes a loosely-typed [`RawValue`] (string, number,
//! boolean, array or null), decides whether it is a valid instance of its
//! domain type, converts it to a canonical value and renders canonical
//! values back to display strings.
//!
//! # Normalizers
//!
//! - [`PhoneNormalizer`]: free-form phone text to a 7-12 digit number,
//!   formatted as `+C (RRR) DDD-DD-DD` with configurable defaults
//! - [`EmailNormalizer`]: delimited string or array to a list of addresses
//! - [`GeoNormalizer`]: `"lat, lon"` or a 2-element array to a [`GeoPoint`]
//! - [`TimeFlagNormalizer`]: boolean-like or date-like input to a timestamp
//!
//! # Architecture
//!
//! - [`domain`]: the [`ValueNormalizer`] contract and its implementations
//! - [`value`]: raw input model and the recognized-empty predicate
//! - [`config`]: per-normalizer options
//! - [`error`]: structured error kinds
//!
//! # Quick Start
//!
//! ```
//! use fieldnorm::{PhoneNormalizer, PhoneOptions, RawValue, ValueNormalizer};
//!
//! let phone = PhoneNormalizer::new(PhoneOptions { country: 7, region: 495 });
//!
//! let parsed = phone.parse(&RawValue::from("123-45-67")).unwrap();
//! assert_eq!(parsed.map(|p| p.as_u64()), Some(1234567));
//!
//! let shown = phone.format(&RawValue::from("123-45-67")).unwrap();
//! assert_eq!(shown, "+7 (495) 123-45-67");
//! ```
//!
//! ## Strict vs lenient
//!
//! ```
//! use fieldnorm::{EmailNormalizer, RawValue, ValueNormalizer};
//!
//! let emails = EmailNormalizer::default();
//! let raw = RawValue::from("a@b.com, not-an-email");
//!
//! assert!(emails.parse(&raw).is_err());
//! assert_eq!(emails.filter(&raw), vec!["a@b.com".to_string()]);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod value;

pub use config::NormalizerConfig;
pub use domain::{
    EmailChecker, EmailNormalizer, EmailOptions, GeoNormalizer, GeoPoint, PhoneComponents,
    PhoneNormalizer, PhoneNumber, PhoneOptions, SyntaxEmailChecker, TimeFlagNormalizer,
    TimeFlagOptions, ValueNormalizer,
};
pub use error::{ErrorKind, NormalizeError, NormalizeResult};
pub use value::RawValue;
