//! Command to test ancestry.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Check whether a path lies at or below another.
///
/// Both paths should be clean and absolute. Exits with status 1 when the
/// path is not a descendant.
#[derive(Args)]
pub struct DescendantCommand {
    /// Candidate descendant
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Candidate ancestor
    #[arg(value_name = "PARENT")]
    pub parent: String,
}

impl DescendantCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let descendant = ctx.ops.is_descendant(&self.path, &self.parent);
        ctx.report("descendant", &[self.path.as_str(), self.parent.as_str()], descendant)?;

        if descendant {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not under {}",
                self.path, self.parent
            )))
        }
    }
}
