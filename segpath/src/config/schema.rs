//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered on top of each other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::path::PathConvention;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, OutputFormat};
/// use segpath::PathConvention;
///
/// let config = Config {
///     convention: Some(PathConvention::Posix),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.log_level, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which root segments are recognized.
    pub convention: Option<PathConvention>,

    /// Logging verbosity: `quiet`, `normal` or `verbose`.
    pub log_level: Option<String>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use segpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare result, one value per line.
    #[default]
    Text,
    /// A JSON object per invocation.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected text or json)"),
            }),
        }
    }
}
