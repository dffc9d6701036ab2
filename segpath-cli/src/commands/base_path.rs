//! Command to show the directory part of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Show the directory part of a path, without a trailing separator.
#[derive(Args)]
pub struct BasePathCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl BasePathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let base = ctx.ops.base_path(&self.path);
        ctx.report("base_path", &[self.path.as_str()], base)
    }
}
