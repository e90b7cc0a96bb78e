//! Email address list domain logic.
//!
//! A list arrives either as a delimited string (`a@b.com, c@d.com; e@f.com`)
//! or as an array. Each candidate is checked by an [`EmailChecker`]; the
//! crate ships a syntax checker and lets callers inject their own.

use super::ValueNormalizer;
use crate::error::{NormalizeError, NormalizeResult};
use crate::value::RawValue;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::ToSocketAddrs;

/// Options of the built-in checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    /// Require the domain to resolve through the system resolver.
    ///
    /// Only A/AAAA records are consulted, so a domain that publishes MX
    /// records alone fails this check.
    pub check_dns: bool,
    /// Accept non-ASCII letters and digits in domain labels.
    pub enable_idn: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            check_dns: false,
            enable_idn: true,
        }
    }
}

/// Longest accepted local part, in bytes.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Longest accepted address, in bytes.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validates a single address, returning a human-readable reason on failure.
pub trait EmailChecker: Send + Sync {
    fn check(&self, address: &str) -> Result<(), String>;
}

/// Syntax checker with optional DNS resolution of the domain.
#[derive(Debug, Clone, Default)]
pub struct SyntaxEmailChecker {
    options: EmailOptions,
}

impl SyntaxEmailChecker {
    pub fn new(options: EmailOptions) -> Self {
        Self { options }
    }

    fn ascii_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$",
            )
            .expect("Valid email regex")
        });
        &PATTERN
    }

    fn idn_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?$",
            )
            .expect("Valid IDN email regex")
        });
        &PATTERN
    }

    fn resolves(domain: &str) -> bool {
        (domain, 25)
            .to_socket_addrs()
            .map(|mut addrs| addrs.next().is_some())
            .unwrap_or(false)
    }
}

impl EmailChecker for SyntaxEmailChecker {
    fn check(&self, address: &str) -> Result<(), String> {
        let pattern = if self.options.enable_idn {
            Self::idn_regex()
        } else {
            Self::ascii_regex()
        };

        if !pattern.is_match(address) {
            return Err("is not a valid email address".to_string());
        }

        // Syntax already guarantees exactly one '@'.
        let (local, domain) = address.split_once('@').unwrap_or((address, ""));

        if local.len() > MAX_LOCAL_PART_LENGTH {
            return Err(format!(
                "local part must not exceed {} characters",
                MAX_LOCAL_PART_LENGTH
            ));
        }

        if address.len() > MAX_EMAIL_LENGTH {
            return Err(format!(
                "email must not exceed {} characters",
                MAX_EMAIL_LENGTH
            ));
        }

        if self.options.check_dns && !Self::resolves(domain) {
            return Err(format!("domain '{}' does not resolve", domain));
        }

        Ok(())
    }
}

fn split_regex() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\s*[,;]+\s*").expect("Valid email delimiter regex"));
    &PATTERN
}

/// A candidate address, or the reason it cannot even be checked.
type Candidate = Result<String, NormalizeError>;

/// Email list normalizer.
pub struct EmailNormalizer {
    checker: Box<dyn EmailChecker>,
}

impl EmailNormalizer {
    /// Creates a normalizer backed by [`SyntaxEmailChecker`].
    pub fn new(options: EmailOptions) -> Self {
        Self::with_checker(Box::new(SyntaxEmailChecker::new(options)))
    }

    /// Creates a normalizer backed by a custom checker.
    pub fn with_checker(checker: Box<dyn EmailChecker>) -> Self {
        Self { checker }
    }

    /// Splits a raw value into candidate addresses.
    fn candidates(raw: &RawValue) -> Vec<Candidate> {
        match raw {
            RawValue::Str(s) => split_regex()
                .split(s)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| Ok(part.to_string()))
                .collect(),
            RawValue::List(items) => items
                .iter()
                .map(|item| {
                    if item.is_scalar() {
                        Ok(item.to_string())
                    } else {
                        Err(NormalizeError::malformed(
                            item.to_string(),
                            format!("expected an email address, found {}", item.type_name()),
                        ))
                    }
                })
                .collect(),
            other => vec![Ok(other.to_string())],
        }
    }

    fn validate(&self, candidate: Candidate) -> Candidate {
        let address = candidate?;
        match self.checker.check(&address) {
            Ok(()) => Ok(address),
            Err(reason) => Err(NormalizeError::malformed(address, reason)),
        }
    }
}

impl Default for EmailNormalizer {
    fn default() -> Self {
        Self::new(EmailOptions::default())
    }
}

impl ValueNormalizer for EmailNormalizer {
    type Value = Vec<String>;
    type Filtered = Vec<String>;

    /// Fails on the first invalid candidate.
    fn parse(&self, raw: &RawValue) -> NormalizeResult<Option<Vec<String>>> {
        if raw.is_recognized_empty() {
            return Ok(None);
        }

        let emails = Self::candidates(raw)
            .into_iter()
            .map(|candidate| self.validate(candidate))
            .collect::<NormalizeResult<Vec<_>>>()?;

        Ok(if emails.is_empty() { None } else { Some(emails) })
    }

    fn filter(&self, raw: &RawValue) -> Vec<String> {
        if raw.is_recognized_empty() {
            return Vec::new();
        }

        Self::candidates(raw)
            .into_iter()
            .filter_map(|candidate| match self.validate(candidate) {
                Ok(address) => Some(address),
                Err(err) => {
                    tracing::debug!(error = %err, "dropping invalid email address");
                    None
                }
            })
            .collect()
    }

    /// Strict: parse errors propagate instead of degrading.
    fn format(&self, raw: &RawValue) -> NormalizeResult<String> {
        Ok(self.parse(raw)?.map(|emails| emails.join(", ")).unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "email"
    }
}
