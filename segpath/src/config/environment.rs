//! Environment variable handling for configuration overrides.
//!
//! `SEGPATH_*` variables override values read from configuration files.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::path::PathConvention;
use std::env;

/// Selects the path convention.
pub const CONVENTION_ENV: &str = "SEGPATH_CONVENTION";

/// Selects the CLI output format.
pub const OUTPUT_FORMAT_ENV: &str = "SEGPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use segpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `SEGPATH_CONVENTION`, `SEGPATH_LOG_MODE` and
    /// `SEGPATH_OUTPUT_FORMAT`. Unset variables leave the config alone.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(CONVENTION_ENV) {
            config.convention = Some(Self::parse_convention(&value)?);
        }

        if let Ok(value) = env::var(LOG_MODE_ENV) {
            LogLevel::parse(&value).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_level = Some(value);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&value)?);
        }

        Ok(())
    }

    fn parse_convention(value: &str) -> Result<PathConvention> {
        value.trim().parse().map_err(|_| Error::Validation {
            field: CONVENTION_ENV.into(),
            message: format!("expected posix, windows or any, got '{value}'"),
        })
    }

    fn parse_output_format(value: &str) -> Result<OutputFormat> {
        value.trim().parse().map_err(|_| Error::Validation {
            field: OUTPUT_FORMAT_ENV.into(),
            message: format!("expected text or json, got '{value}'"),
        })
    }
}
