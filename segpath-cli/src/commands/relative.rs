//! Command to express a path relative to a base.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Express a path relative to a base directory.
#[derive(Args)]
pub struct RelativeCommand {
    /// Absolute path to convert
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Absolute base directory
    #[arg(value_name = "BASE")]
    pub base: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let relative = ctx.ops.to_relative(&self.path, &self.base)?;
        ctx.report("to_relative", &[self.path.as_str(), self.base.as_str()], relative)
    }
}
