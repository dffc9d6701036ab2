//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, AppendCommand, AppendExtCommand, BasePathCommand, ChildCommand,
    ClassifyCommand, CleanCommand, CompletionsCommand, DescendantCommand, EqualCommand,
    ExtensionCommand, FileNameCommand, RelativeCommand, RemoveExtCommand, RemoveFileNameCommand,
    SegmentsCommand,
};
use clap::{Parser, Subcommand};
use segpath::{OutputFormat, PathConvention};
use std::path::PathBuf;

/// Command-line tool for manipulating path strings.
#[derive(Parser)]
#[command(name = "segpath")]
#[command(version, about = "Clean, join and relativize path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Which root forms are recognized (posix, windows, any)
    #[arg(long, value_name = "CONVENTION", global = true, env = "SEGPATH_CONVENTION")]
    pub convention: Option<PathConvention>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve `.` and `..` segments and collapse separators
    Clean(CleanCommand),

    /// Join a relative path onto a base path
    Append(AppendCommand),

    /// Add an extension to the last segment
    AppendExt(AppendExtCommand),

    /// Strip the extension of the last segment
    RemoveExt(RemoveExtCommand),

    /// Strip the last segment
    RemoveFileName(RemoveFileNameCommand),

    /// Show the directory part of a path
    BasePath(BasePathCommand),

    /// Show the last segment of a path
    FileName(FileNameCommand),

    /// Show the extension of the last segment
    Extension(ExtensionCommand),

    /// Express a path relative to a base directory
    Relative(RelativeCommand),

    /// Resolve a relative path against a base directory
    Absolute(AbsoluteCommand),

    /// List the segments of a path
    Segments(SegmentsCommand),

    /// Report the root, absolute and relative classification of a path
    Classify(ClassifyCommand),

    /// Check whether two paths are equal
    Equal(EqualCommand),

    /// Check whether a path lies at or below another
    Descendant(DescendantCommand),

    /// Check whether a path lies directly below another
    Child(ChildCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
