//! Command to compare two paths.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;

/// Check whether two paths are equal, ignoring separator style.
///
/// Exits with status 1 when they differ.
#[derive(Args)]
pub struct EqualCommand {
    /// First path
    #[arg(value_name = "PATH1")]
    pub path1: String,

    /// Second path
    #[arg(value_name = "PATH2")]
    pub path2: String,
}

impl EqualCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let equal = ctx.ops.path_equal(&self.path1, &self.path2);
        ctx.report("equal", &[self.path1.as_str(), self.path2.as_str()], equal)?;

        if equal {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} and {} are different paths",
                self.path1, self.path2
            )))
        }
    }
}
