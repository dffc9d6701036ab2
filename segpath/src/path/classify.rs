//! Root, absolute/relative and ancestry classification.
//!
//! Everything here is a read-only walk over one or two paths with
//! [`SegmentCursor`]s; nothing allocates.

use crate::path::convention::{is_drive_root_segment, is_posix_root_segment};
use crate::path::cursor::{SegmentCursor, Step};
use crate::path::ops::PathOps;
use crate::path::segment::{is_separator, Segment};

impl PathOps {
    /// Whether `segment` of `path` is a root segment under this convention.
    #[must_use]
    pub fn is_root_segment(&self, path: &str, segment: Segment) -> bool {
        self.convention().is_root_segment(path, segment)
    }

    /// Whether `path` is nothing but a root: `/`, `C:` or `C:/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert!(ops.is_root("/"));
    /// assert!(ops.is_root("C:\\"));
    /// assert!(!ops.is_root("/usr"));
    /// ```
    #[must_use]
    pub fn is_root(&self, path: &str) -> bool {
        let Ok(mut cursor) = SegmentCursor::first(path) else {
            return false;
        };
        self.is_root_segment(path, cursor.segment()) && cursor.advance() == Step::AtEnd
    }

    /// Whether `path` consists only of separators.
    #[must_use]
    pub fn is_posix_root(&self, path: &str) -> bool {
        !path.is_empty() && path.bytes().all(is_separator)
    }

    /// Whether `segment` is the empty leading root of a separator-prefixed path.
    #[must_use]
    pub fn is_posix_root_segment(&self, path: &str, segment: Segment) -> bool {
        is_posix_root_segment(path, segment)
    }

    /// Whether `path` is a drive letter prefix, optionally followed by separators.
    #[must_use]
    pub fn is_windows_root(&self, path: &str) -> bool {
        let bytes = path.as_bytes();
        bytes.len() >= 2
            && is_drive_root_segment(path, Segment::new(0, 2))
            && bytes[2..].iter().copied().all(is_separator)
    }

    /// Whether `segment` is a `<letter>:` drive prefix at the start of `path`.
    #[must_use]
    pub fn is_windows_root_segment(&self, path: &str, segment: Segment) -> bool {
        is_drive_root_segment(path, segment)
    }

    /// Whether `path` does not start with a root segment.
    ///
    /// The empty path is relative.
    #[must_use]
    pub fn is_relative(&self, path: &str) -> bool {
        match SegmentCursor::first(path) {
            Ok(cursor) => !self.is_root_segment(path, cursor.segment()),
            Err(_) => true,
        }
    }

    /// Whether `path` starts with a root segment.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        !self.is_relative(path)
    }

    /// Segment-wise, case-sensitive path equality.
    ///
    /// Separators and their repetition do not matter; segment content and
    /// segment count do.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert!(ops.path_equal("C:/My/Folder", "C:\\My\\Folder"));
    /// assert!(!ops.path_equal("/a/b", "/a/b/c"));
    /// ```
    #[must_use]
    pub fn path_equal(&self, path1: &str, path2: &str) -> bool {
        if std::ptr::eq(path1, path2) || (path1.is_empty() && path2.is_empty()) {
            return true;
        }

        let (Ok(mut a), Ok(mut b)) = (SegmentCursor::first(path1), SegmentCursor::first(path2))
        else {
            return false;
        };

        loop {
            if !a.iterators_equal(&b) {
                return false;
            }
            match (a.advance(), b.advance()) {
                (Step::Moved, Step::Moved) => {}
                (Step::AtEnd, Step::AtEnd) => return true,
                _ => return false,
            }
        }
    }

    /// Whether `child` lies at or beneath `parent`.
    ///
    /// Every segment of `parent` must match the corresponding segment of
    /// `child`. A path is a descendant of itself, and every non-empty path is
    /// a descendant of the empty path.
    ///
    /// Both paths are expected to be absolute and already cleaned; `.` and
    /// `..` segments are compared literally.
    #[must_use]
    pub fn is_descendant(&self, child: &str, parent: &str) -> bool {
        remaining_below(child, parent).is_some()
    }

    /// Whether `child` is exactly one level beneath `parent`.
    ///
    /// Same preconditions as [`PathOps::is_descendant`]. A path is not a
    /// child of itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert!(ops.is_child("/a/b", "/a"));
    /// assert!(ops.is_descendant("/a/b/c", "/a"));
    /// assert!(!ops.is_child("/a/b/c", "/a"));
    /// ```
    #[must_use]
    pub fn is_child(&self, child: &str, parent: &str) -> bool {
        remaining_below(child, parent) == Some(1)
    }

    /// The text after the last separator; empty for a trailing separator.
    #[must_use]
    pub fn file_name<'a>(&self, path: &'a str) -> &'a str {
        file_name(path)
    }

    /// The text after the last `.` of the file name.
    ///
    /// Empty if the file name has no `.`, or if its only `.` is the leading
    /// one (`.bashrc`). For `archive.tar.gz` this is `gz`.
    #[must_use]
    pub fn extension<'a>(&self, path: &'a str) -> &'a str {
        extension(path)
    }

    /// Whether the file name has a non-empty extension.
    #[must_use]
    pub fn has_extension(&self, path: &str) -> bool {
        !extension(path).is_empty()
    }

    /// Case-insensitive comparison of the path's extension with `ext`.
    #[must_use]
    pub fn extension_equal(&self, path: &str, ext: &str) -> bool {
        extension(path).eq_ignore_ascii_case(ext)
    }
}

/// Counts the segments of `child` left over once every segment of `parent`
/// has been matched, or `None` if `child` is not at or beneath `parent`.
fn remaining_below(child: &str, parent: &str) -> Option<usize> {
    let mut c = SegmentCursor::first(child).ok()?;
    let Ok(mut p) = SegmentCursor::first(parent) else {
        return Some(1 + count_after(c));
    };

    loop {
        if !p.iterators_equal(&c) {
            return None;
        }
        let parent_step = p.advance();
        let child_step = c.advance();
        match (parent_step, child_step) {
            (Step::AtEnd, Step::AtEnd) => return Some(0),
            (Step::AtEnd, Step::Moved) => return Some(1 + count_after(c)),
            (Step::Moved, Step::AtEnd) => return None,
            (Step::Moved, Step::Moved) => {}
        }
    }
}

fn count_after(mut cursor: SegmentCursor<'_>) -> usize {
    let mut count = 0;
    while cursor.advance().moved() {
        count += 1;
    }
    count
}

pub(crate) fn file_name(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

pub(crate) fn extension(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(i) if i > 0 => &name[i + 1..],
        _ => &name[name.len()..],
    }
}
