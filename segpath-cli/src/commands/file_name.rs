//! Command to show the last segment of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Show the last segment of a path.
#[derive(Args)]
pub struct FileNameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Drop the extension from the name
    #[arg(long)]
    pub stem: bool,
}

impl FileNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let name = if self.stem {
            ctx.ops.file_name_without_extension(&self.path)
        } else {
            ctx.ops.file_name(&self.path)
        };
        ctx.report("file_name", &[self.path.as_str()], name)
    }
}
