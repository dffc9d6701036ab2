//! Bidirectional segment cursor.
//!
//! A [`SegmentCursor`] walks a path one segment at a time in either
//! direction without allocating. Runs of separators are skipped, `/` and `\`
//! are interchangeable, and a path that begins with a separator has a
//! zero-length root segment at offset 0.
//!
//! ```
//! use segpath::{SegmentCursor, Step};
//!
//! let mut cursor = SegmentCursor::first("/usr//local\\bin").unwrap();
//! assert_eq!(cursor.text(), "");
//! let mut seen = Vec::new();
//! while cursor.advance() == Step::Moved {
//!     seen.push(cursor.text());
//! }
//! assert_eq!(seen, ["usr", "local", "bin"]);
//! ```

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::path::segment::{is_separator, segments_equal, Segment};

/// Outcome of moving a cursor.
///
/// Running off either end is a normal loop terminator, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Step {
    /// The cursor now sits on another segment.
    Moved,
    /// There are no more segments in that direction.
    AtEnd,
}

impl Step {
    /// True if the cursor moved.
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// A position within a borrowed path: the path plus its current segment.
///
/// The current segment always lies within the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCursor<'a> {
    path: &'a str,
    segment: Segment,
}

impl<'a> SegmentCursor<'a> {
    /// Positions a cursor on the first segment of `path`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty.
    pub fn first(path: &'a str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid("cannot iterate an empty path"));
        }

        let length = path.bytes().take_while(|&b| !is_separator(b)).count();
        Ok(Self {
            path,
            segment: Segment::new(0, length),
        })
    }

    /// Positions a cursor on the last segment of `path`.
    ///
    /// Trailing separators are skipped, so the last segment of `a/b/` is `b`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty.
    pub fn last(path: &'a str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::invalid("cannot iterate an empty path"));
        }

        let mut cursor = Self {
            path,
            segment: Segment::new(path.len(), 0),
        };
        // A non-empty path always has a segment behind its end.
        let _ = cursor.retreat();
        Ok(cursor)
    }

    /// The path being walked.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }

    /// The current segment.
    #[must_use]
    pub const fn segment(&self) -> Segment {
        self.segment
    }

    /// Text of the current segment.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.segment.text(self.path)
    }

    /// Moves to the next segment.
    pub fn advance(&mut self) -> Step {
        let bytes = self.path.as_bytes();
        let mut offset = self.segment.end();

        while offset < bytes.len() && is_separator(bytes[offset]) {
            offset += 1;
        }

        if offset >= bytes.len() {
            self.segment = Segment::new(bytes.len(), 0);
            return Step::AtEnd;
        }

        let mut end = offset;
        while end < bytes.len() && !is_separator(bytes[end]) {
            end += 1;
        }

        self.segment = Segment::new(offset, end - offset);
        Step::Moved
    }

    /// Moves to the previous segment.
    ///
    /// Retreating from the first segment reports `AtEnd` and leaves the
    /// cursor where it was.
    pub fn retreat(&mut self) -> Step {
        if self.segment.offset == 0 {
            return Step::AtEnd;
        }

        let bytes = self.path.as_bytes();
        let mut offset = self.segment.offset;

        loop {
            offset -= 1;
            if offset == 0 || !is_separator(bytes[offset]) {
                break;
            }
        }

        if offset == 0 {
            self.segment = if is_separator(bytes[0]) {
                Segment::ROOT
            } else {
                Segment::new(0, 1)
            };
            return Step::Moved;
        }

        let end = offset + 1;
        while offset > 0 && !is_separator(bytes[offset]) {
            offset -= 1;
        }
        if is_separator(bytes[offset]) {
            offset += 1;
        }

        self.segment = Segment::new(offset, end - offset);
        Step::Moved
    }

    /// True when the cursor sits on the first segment.
    #[must_use]
    pub const fn at_start(&self) -> bool {
        self.segment.offset == 0
    }

    /// True when the cursor has run past the last segment.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.segment.offset >= self.path.len()
    }

    /// Compares the current segments of two cursors by content.
    #[must_use]
    pub fn iterators_equal(&self, other: &SegmentCursor<'_>) -> bool {
        segments_equal(self.path, self.segment, other.path, other.segment)
    }
}

/// Iterator over the segment texts of a path, from either end.
///
/// The root segment of a path that starts with a separator is yielded as
/// an empty string.
///
/// # Examples
///
/// ```
/// use segpath::segments;
///
/// let forward: Vec<_> = segments("C:\\My/Folder/").collect();
/// assert_eq!(forward, ["C:", "My", "Folder"]);
///
/// let backward: Vec<_> = segments("/a/b").rev().collect();
/// assert_eq!(backward, ["b", "a", ""]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    front: Option<SegmentCursor<'a>>,
    back: Option<SegmentCursor<'a>>,
}

/// Iterates over the segments of `path`. An empty path has no segments.
#[must_use]
pub fn segments(path: &str) -> Segments<'_> {
    Segments {
        front: SegmentCursor::first(path).ok(),
        back: SegmentCursor::last(path).ok(),
    }
}

impl<'a> Segments<'a> {
    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut front = self.front?;
        let back = self.back?;
        let text = front.text();

        if front.segment().offset == back.segment().offset || !front.advance().moved() {
            self.finish();
        } else {
            self.front = Some(front);
        }
        Some(text)
    }
}

impl<'a> DoubleEndedIterator for Segments<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let front = self.front?;
        let mut back = self.back?;
        let text = back.text();

        if front.segment().offset == back.segment().offset || !back.retreat().moved() {
            self.finish();
        } else {
            self.back = Some(back);
        }
        Some(text)
    }
}

impl<'a> FusedIterator for Segments<'a> {}
