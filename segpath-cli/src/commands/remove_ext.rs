//! Command to strip an extension.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Strip the extension of the last segment.
#[derive(Args)]
pub struct RemoveExtCommand {
    /// Path to strip
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RemoveExtCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let stripped = ctx.ops.remove_extension(&self.path);
        ctx.report("remove_extension", &[self.path.as_str()], stripped)
    }
}
