//! Command to add an extension.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Add an extension to the last segment.
#[derive(Args)]
pub struct AppendExtCommand {
    /// Path to extend
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Extension, with or without the leading dot
    #[arg(value_name = "EXT", allow_hyphen_values = true)]
    pub ext: String,
}

impl AppendExtCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let extended = ctx.ops.append_extension(&self.path, &self.ext);
        ctx.report("append_extension", &[self.path.as_str(), self.ext.as_str()], extended)
    }
}
