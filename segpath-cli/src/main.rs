//! Main entry point for the segpath CLI.
//!
//! This is the command-line interface for the segpath path library.
//! Every library operation is exposed as a subcommand:
//! - `clean`: Resolve `.` and `..` segments
//! - `append`: Join two paths
//! - `relative` / `absolute`: Convert between relative and absolute forms
//! - `equal` / `descendant` / `child`: Path predicates

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use segpath::LogLevel;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        convention: cli.convention,
        format: cli.format,
        config: cli.config,
    };

    // Initialize logging from flags, environment and configuration
    let log_level = utils::init_logging(&global);

    // Execute the command
    let result = match cli.command {
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Append(cmd) => cmd.execute(&global),
        cli::Command::AppendExt(cmd) => cmd.execute(&global),
        cli::Command::RemoveExt(cmd) => cmd.execute(&global),
        cli::Command::RemoveFileName(cmd) => cmd.execute(&global),
        cli::Command::BasePath(cmd) => cmd.execute(&global),
        cli::Command::FileName(cmd) => cmd.execute(&global),
        cli::Command::Extension(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Segments(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Equal(cmd) => cmd.execute(&global),
        cli::Command::Descendant(cmd) => cmd.execute(&global),
        cli::Command::Child(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if log_level > LogLevel::Quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
