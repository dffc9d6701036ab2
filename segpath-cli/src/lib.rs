//! Library exports for segpath-cli.
//!
//! This module exports the CLI structure so that documentation tooling can
//! build the command tree without running the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
