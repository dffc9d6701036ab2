//! Command to list the segments of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use segpath::segments;

/// List the segments of a path, one per line.
///
/// The empty segment in front of a leading separator is listed too, so
/// `/usr/bin` prints an empty first line.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// List from the last segment to the first
    #[arg(long)]
    pub reverse: bool,
}

impl SegmentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = Context::load(global)?;
        if self.path.is_empty() {
            return Err(CliError::InvalidArguments("path is empty".to_string()));
        }

        let list: Vec<&str> = if self.reverse {
            segments(&self.path).rev().collect()
        } else {
            segments(&self.path).collect()
        };
        ctx.report("segments", &[self.path.as_str()], list)
    }
}
