#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # segpath
//!
//! A library for manipulating path strings without touching the filesystem.
//!
//! Paths are borrowed `&str` values split into segments on `/` or `\`. On top
//! of a bidirectional segment cursor the library classifies paths (root,
//! absolute, relative, descendant, child), resolves `.` and `..` lexically,
//! and builds new paths by appending, stripping and relativizing.
//!
//! ## Core Types
//!
//! - [`PathOps`]: every path operation, bound to a [`PathConvention`]
//! - [`Segment`], [`SegmentCursor`] and [`Segments`]: segment iteration
//! - [`WriteTarget`] and [`PathWriter`]: the bounded buffer protocol
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//!
//! ## Examples
//!
//! ```
//! use segpath::{PathOps, segments};
//!
//! let ops = PathOps::new();
//!
//! // Classify
//! assert!(ops.is_absolute("C:\\Users"));
//! assert!(ops.path_equal("C:/My/Folder", "C:\\My\\Folder"));
//!
//! // Normalize and transform
//! assert_eq!(ops.clean("my/messy/../path").unwrap(), "my/path");
//! assert_eq!(ops.append("C:/My", "Folder").unwrap(), "C:/My/Folder");
//! assert_eq!(ops.to_relative("/a/b/c", "/a/b").unwrap(), "c");
//!
//! // Iterate
//! let names: Vec<_> = segments("/usr/local/bin").skip(1).collect();
//! assert_eq!(names, ["usr", "local", "bin"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    buffer_str, is_separator, segments, segments_equal, BoundedWriter, Measure, PathConvention,
    PathOps, PathWriter, Segment, SegmentCursor, Segments, Step, WriteTarget,
};
