//! Build script for segpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("segpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean, join and relativize path strings")
        .long_about(
            "Command-line tool for manipulating path strings without touching the filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convention")
                .long("convention")
                .help("Which root forms are recognized (posix, windows, any)")
                .value_name("CONVENTION")
                .global(true)
                .env("SEGPATH_CONVENTION"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text, json)")
                .value_name("FORMAT")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("clean").about("Resolve `.` and `..` segments and collapse separators"),
            Command::new("append")
                .about("Join a relative path onto a base path")
                .long_about("Join a relative path onto a base path, optionally cleaning the result"),
            Command::new("append-ext").about("Add an extension to the last segment"),
            Command::new("remove-ext").about("Strip the extension of the last segment"),
            Command::new("remove-file-name").about("Strip the last segment"),
            Command::new("base-path").about("Show the directory part of a path"),
            Command::new("file-name").about("Show the last segment of a path"),
            Command::new("extension").about("Show the extension of the last segment"),
            Command::new("relative").about("Express a path relative to a base directory"),
            Command::new("absolute").about("Resolve a relative path against a base directory"),
            Command::new("segments").about("List the segments of a path"),
            Command::new("classify")
                .about("Report the root, absolute and relative classification of a path"),
            Command::new("equal").about("Check whether two paths are equal"),
            Command::new("descendant").about("Check whether a path lies at or below another"),
            Command::new("child").about("Check whether a path lies directly below another"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("segpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
