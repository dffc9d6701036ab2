//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigMerger};
/// use segpath::PathConvention;
///
/// let low = Config { convention: Some(PathConvention::Posix), ..Default::default() };
/// let high = Config { convention: Some(PathConvention::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.convention, Some(PathConvention::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.convention.is_some() {
            target.convention = source.convention;
        }

        if source.log_level.is_some() {
            target.log_level.clone_from(&source.log_level);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
