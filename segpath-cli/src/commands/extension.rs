//! Command to show the extension of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Show the extension of the last segment, without the dot.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExtensionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let ext = ctx.ops.extension(&self.path);
        ctx.report("extension", &[self.path.as_str()], ext)
    }
}
