//! Command to join two paths.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Join a relative path onto a base path.
#[derive(Args)]
pub struct AppendCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Relative path to append
    #[arg(value_name = "OTHER")]
    pub other: String,

    /// Resolve `.` and `..` in the joined path
    #[arg(long)]
    pub clean: bool,
}

impl AppendCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let (operation, joined) = if self.clean {
            (
                "append_and_clean",
                ctx.ops.append_and_clean(&self.base, &self.other)?,
            )
        } else {
            ("append", ctx.ops.append(&self.base, &self.other)?)
        };
        ctx.report(operation, &[self.base.as_str(), self.other.as_str()], joined)
    }
}
