//! Normalizer configuration.
//!
//! [`NormalizerConfig::load`] layers the built-in defaults, an optional TOML
//! file and `FIELDNORM_*` environment variables (`FIELDNORM_PHONE__COUNTRY=7`).
//! [`NormalizerConfig::defaults`] returns the built-in defaults without I/O.

use crate::domain::{
    EmailNormalizer, EmailOptions, GeoNormalizer, PhoneNormalizer, PhoneOptions,
    TimeFlagNormalizer, TimeFlagOptions,
};
use crate::error::{NormalizeError, NormalizeResult};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"
[phone]
country = 0
region = 0

[email]
check_dns = false
enable_idn = true

[time_flag]
format = "%Y-%m-%d %H:%M:%S"
"#;

/// Per-normalizer options, fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub phone: PhoneOptions,
    #[serde(default)]
    pub email: EmailOptions,
    #[serde(default)]
    pub time_flag: TimeFlagOptions,
}

impl NormalizerConfig {
    /// Loads configuration from `path` (if given) and the environment.
    pub fn load(path: Option<&Path>) -> NormalizeResult<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            if !path.exists() {
                return Err(NormalizeError::invalid_argument(
                    "config",
                    format!("file does not exist: {}", path.display()),
                ));
            }
            builder =
                builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }

        builder
            .add_source(
                config::Environment::with_prefix("FIELDNORM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| NormalizeError::invalid_argument("config", e.to_string()))
            .and_then(|config| {
                config.time_flag.validate()?;
                Ok(config)
            })
    }

    /// Built-in defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn phone(&self) -> PhoneNormalizer {
        PhoneNormalizer::new(self.phone)
    }

    pub fn email(&self) -> EmailNormalizer {
        EmailNormalizer::new(self.email)
    }

    pub fn geo(&self) -> GeoNormalizer {
        GeoNormalizer::new()
    }

    pub fn time_flag(&self) -> TimeFlagNormalizer {
        TimeFlagNormalizer::new(self.time_flag.clone())
    }
}
