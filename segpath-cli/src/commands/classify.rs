//! Command to classify a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use serde::Serialize;

/// Report the root, absolute and relative classification of a path.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Path to classify
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct Classification<'a> {
    root: bool,
    absolute: bool,
    relative: bool,
    file_name: &'a str,
    extension: &'a str,
}

impl ClassifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        let ops = &ctx.ops;
        let classification = Classification {
            root: ops.is_root(&self.path),
            absolute: ops.is_absolute(&self.path),
            relative: ops.is_relative(&self.path),
            file_name: ops.file_name(&self.path),
            extension: ops.extension(&self.path),
        };
        ctx.report("classify", &[self.path.as_str()], classification)
    }
}
