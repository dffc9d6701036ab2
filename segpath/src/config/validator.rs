//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates configuration values that serde cannot check on its own.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { log_level: Some("loud".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if `log_level` is not a known level.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref level) = config.log_level {
            LogLevel::parse(level).map_err(|message| Error::Validation {
                field: "log_level".into(),
                message,
            })?;
        }

        Ok(())
    }
}
