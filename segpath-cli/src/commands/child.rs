//! Command to test direct parentage.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Check whether a path lies exactly one segment below another.
///
/// Exits with status 1 when it does not.
#[derive(Args)]
pub struct ChildCommand {
    /// Candidate child
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Candidate parent
    #[arg(value_name = "PARENT")]
    pub parent: String,
}

impl ChildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let child = ctx.ops.is_child(&self.path, &self.parent);
        ctx.report("child", &[self.path.as_str(), self.parent.as_str()], child)?;

        if child {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not a child of {}",
                self.path, self.parent
            )))
        }
    }
}
