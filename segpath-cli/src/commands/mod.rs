//! CLI command implementations.
//!
//! Each module wraps one library operation:
//! - `clean`, `append`, `relative`, `absolute`: produce new paths
//! - `append_ext`, `remove_ext`, `remove_file_name`, `base_path`: edit the last segment
//! - `file_name`, `extension`, `segments`, `classify`: inspect a path
//! - `equal`, `descendant`, `child`: predicates that exit 1 when false
//! - `completions`: shell completion scripts

pub mod absolute;
pub mod append;
pub mod append_ext;
pub mod base_path;
pub mod child;
pub mod classify;
pub mod clean;
pub mod completions;
pub mod descendant;
pub mod equal;
pub mod extension;
pub mod file_name;
pub mod relative;
pub mod remove_ext;
pub mod remove_file_name;
pub mod segments;

pub use absolute::AbsoluteCommand;
pub use append::AppendCommand;
pub use append_ext::AppendExtCommand;
pub use base_path::BasePathCommand;
pub use child::ChildCommand;
pub use classify::ClassifyCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use descendant::DescendantCommand;
pub use equal::EqualCommand;
pub use extension::ExtensionCommand;
pub use file_name::FileNameCommand;
pub use relative::RelativeCommand;
pub use remove_ext::RemoveExtCommand;
pub use remove_file_name::RemoveFileNameCommand;
pub use segments::SegmentsCommand;
