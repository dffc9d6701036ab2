//! Command to lexically normalize a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Resolve `.` and `..` segments and collapse separators.
#[derive(Args)]
pub struct CleanCommand {
    /// Path to clean
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let cleaned = ctx.ops.clean(&self.path)?;
        ctx.report("clean", &[self.path.as_str()], cleaned)
    }
}
