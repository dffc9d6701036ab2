//! Command to strip the last segment.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Strip the last segment and the separator before it.
#[derive(Args)]
pub struct RemoveFileNameCommand {
    /// Path to strip
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RemoveFileNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let parent = ctx.ops.remove_file_name(&self.path)?;
        ctx.report("remove_file_name", &[self.path.as_str()], parent)
    }
}
