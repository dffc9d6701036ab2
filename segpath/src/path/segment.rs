//! Path segments as windows into a borrowed path string.

/// Returns true for the two accepted separator bytes, `/` and `\`.
#[must_use]
pub const fn is_separator(byte: u8) -> bool {
    byte == b'/' || byte == b'\\'
}

/// A half-open `(offset, length)` window into a path string.
///
/// A segment never includes a separator. The zero-length segment at offset
/// 0 is the root sentinel of a path that starts with a separator.
///
/// # Examples
///
/// ```
/// use segpath::Segment;
///
/// let seg = Segment::new(3, 4);
/// assert_eq!(seg.text("/a/path/x"), "path");
/// assert_eq!(seg.end(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Byte offset of the first byte of the segment.
    pub offset: usize,
    /// Number of bytes in the segment.
    pub length: usize,
}

impl Segment {
    /// The root sentinel: offset 0, length 0.
    pub const ROOT: Self = Self::new(0, 0);

    /// Creates a segment.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Offset one past the last byte.
    #[must_use]
    pub const fn end(self) -> usize {
        self.offset + self.length
    }

    /// True for zero-length segments.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// The text of this segment within `path`, or `None` if the segment
    /// does not lie within `path` on character boundaries.
    #[must_use]
    pub fn get(self, path: &str) -> Option<&str> {
        path.get(self.offset..self.end())
    }

    /// The text of this segment within `path`.
    ///
    /// # Panics
    ///
    /// Panics if the segment does not lie within `path`; segments produced by
    /// a cursor over `path` always do. Use [`Segment::get`] for segments
    /// built by hand.
    #[must_use]
    pub fn text(self, path: &str) -> &str {
        &path[self.offset..self.end()]
    }

    /// True if this segment of `path` is `.`.
    #[must_use]
    pub fn is_dot(self, path: &str) -> bool {
        self.get(path) == Some(".")
    }

    /// True if this segment of `path` is `..`.
    #[must_use]
    pub fn is_dot_dot(self, path: &str) -> bool {
        self.get(path) == Some("..")
    }
}

/// Compares the content of two segments, which may come from different paths.
///
/// The comparison is byte-for-byte and case-sensitive. Separators are never
/// part of a segment, so `a\b` and `a/b` have equal segments. A segment
/// that does not lie within its path equals nothing.
///
/// # Examples
///
/// ```
/// use segpath::{segments_equal, Segment};
///
/// assert!(segments_equal("/a/b", Segment::new(3, 1), "x\\b", Segment::new(2, 1)));
/// assert!(!segments_equal("/a/B", Segment::new(3, 1), "/a/b", Segment::new(3, 1)));
/// ```
#[must_use]
pub fn segments_equal(path_a: &str, seg_a: Segment, path_b: &str, seg_b: Segment) -> bool {
    if seg_a.length != seg_b.length {
        return false;
    }
    match (seg_a.get(path_a), seg_b.get(path_b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
