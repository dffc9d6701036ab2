//! Command to resolve a relative path against a base.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Resolve a relative path against a base directory.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Relative path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Absolute base directory
    #[arg(value_name = "BASE")]
    pub base: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let absolute = ctx.ops.to_absolute(&self.path, &self.base)?;
        ctx.report("to_absolute", &[self.path.as_str(), self.base.as_str()], absolute)
    }
}
