//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and output formatting.

use crate::error::CliError;
use serde::Serialize;
use serde_json::Value;
use segpath::{Config, ConfigBuilder, LogLevel, Logger, OutputFormat, PathConvention, PathOps};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the path convention.
    pub convention: Option<PathConvention>,

    /// Override the output format.
    pub format: Option<OutputFormat>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let config = builder
        .with_config(Config {
            convention: global.convention,
            log_level: None,
            output_format: global.format,
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    log::debug!(
        "using {} convention",
        config.convention.unwrap_or_default()
    );

    Ok(config)
}

/// Install the global logger and return its level.
///
/// `--verbose` and `--quiet` win. Otherwise the configured `log_level`
/// applies, which already includes `SEGPATH_LOG_MODE` over the files. If the
/// configuration cannot be loaded the flags and environment alone decide;
/// the command reports the configuration error itself.
pub fn init_logging(global: &GlobalOptions) -> LogLevel {
    let mut logger = segpath::init_logger(global.verbose, global.quiet);

    if !global.verbose && !global.quiet {
        let configured = load_configuration(global)
            .ok()
            .and_then(|config| config.log_level)
            .and_then(|value| LogLevel::parse(&value).ok());
        if let Some(level) = configured {
            logger = Logger::new(level);
        }
    }

    let level = logger.level();
    logger.install();
    level
}

/// Everything a path command needs: the configured operations and the
/// output format.
pub struct Context {
    /// Path operations bound to the configured convention.
    pub ops: PathOps,
    /// How results are printed.
    pub format: OutputFormat,
}

impl Context {
    /// Load configuration and build the command context.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        Ok(Self {
            ops: PathOps::from_config(&config),
            format: config.output_format.unwrap_or_default(),
        })
    }

    /// Print the result of `operation` applied to `input`.
    pub fn report<T: Serialize>(
        &self,
        operation: &str,
        input: &[&str],
        result: T,
    ) -> Result<(), CliError> {
        println!("{}", format_report(self.format, operation, input, result)?);
        Ok(())
    }
}

#[derive(Serialize)]
struct Report<'a, T> {
    operation: &'a str,
    input: &'a [&'a str],
    result: T,
}

/// Format one command result.
///
/// JSON output is a single object with `operation`, `input` and `result`
/// keys. Text output prints the bare result: strings as-is, lists one item
/// per line and objects as `key: value` lines.
pub fn format_report<T: Serialize>(
    format: OutputFormat,
    operation: &str,
    input: &[&str],
    result: T,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let report = Report {
                operation,
                input,
                result,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => Ok(format_text(&serde_json::to_value(result)?)),
    }
}

fn format_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{key}: {}", format_text(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}
