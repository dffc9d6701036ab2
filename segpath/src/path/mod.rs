//! Filesystem-free path string manipulation.
//!
//! Paths are plain `&str` values. Both `/` and `\` separate segments,
//! repeated separators collapse, and nothing is ever looked up on disk.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A [`Segment`] is an `(offset, length)` window into a borrowed path. A
//! [`SegmentCursor`] walks those windows in either direction; the
//! [`segments`] iterator wraps it for `for` loops.
//!
//! ## Conventions
//!
//! A [`PathConvention`] decides which leading segments are roots: the empty
//! segment before a leading separator (`/usr`), a drive prefix (`C:/Users`),
//! or both. [`PathOps`] carries the convention and exposes every operation.
//!
//! ## Bounded output
//!
//! Each producing operation has an owned form returning `String` and a
//! bounded form writing into a caller buffer; see [`writer`] for the
//! measure/write protocol.
//!
//! # Examples
//!
//! ```
//! use segpath::PathOps;
//!
//! let ops = PathOps::new();
//!
//! let joined = ops.append("C:/Projects", "app/../lib").unwrap();
//! assert_eq!(joined, "C:/Projects/app/../lib");
//! assert_eq!(ops.clean(&joined).unwrap(), "C:/Projects/lib");
//!
//! assert!(ops.is_child("/home/user", "/home"));
//! assert_eq!(ops.to_relative("/home/user/src", "/home/other").unwrap(), "../user/src");
//! ```

pub mod classify;
pub mod convention;
pub mod cursor;
pub mod normalize;
pub mod ops;
pub mod segment;
pub mod transform;
pub mod writer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use convention::PathConvention;
pub use cursor::{segments, SegmentCursor, Segments, Step};
pub use ops::PathOps;
pub use segment::{is_separator, segments_equal, Segment};
pub use writer::{buffer_str, BoundedWriter, Measure, PathWriter, WriteTarget};
