//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, OutputFormat};
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::PathConvention;
use std::path::PathBuf;

/// Builds a [`Config`] from defaults, files, environment and overrides.
///
/// Later layers win: defaults < user config < explicit file < environment
/// < [`ConfigBuilder::with_config`].
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigBuilder, OutputFormat};
/// use segpath::PathConvention;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         convention: Some(PathConvention::Posix),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.convention, Some(PathConvention::Posix));
/// assert_eq!(config.output_format, Some(OutputFormat::Text));
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder that reads files and environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read any configuration file.
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `SEGPATH_*` environment variables.
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Look for the user config in `dir` instead of `~/.segpath`.
    pub fn with_user_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_dir = Some(dir.into());
        self
    }

    /// Also read `path`, above the user config.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Programmatic overrides with the highest precedence.
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// The built-in defaults.
    #[must_use]
    pub fn defaults() -> Config {
        Config {
            convention: Some(PathConvention::default()),
            log_level: None,
            output_format: Some(OutputFormat::default()),
        }
    }

    /// Assemble the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be loaded, or if an
    /// environment variable or override holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Self::defaults();

        if !self.skip_files {
            let sources =
                ConfigLoader::load_all(self.user_dir.as_deref(), self.config_file.as_deref())?;
            log::debug!("merging {} configuration file(s)", sources.len());
            ConfigMerger::merge_into(&mut config, &ConfigMerger::merge(sources));
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
