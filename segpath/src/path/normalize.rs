//! Lexical resolution of `.` and `..` segments.
//!
//! The walk runs backward from the last segment with a counter of pending
//! `..` segments. A regular segment is dropped while the counter is positive
//! and kept otherwise; kept segments are collected on a stack and emitted
//! left to right once the walk reaches the first segment. Root segments are
//! never dropped, and `..` segments with nothing left to consume vanish.
//!
//! Nothing here touches the filesystem, so `a/link/..` becomes `a` even if
//! `link` is a symlink.

use crate::error::{Error, Result};
use crate::path::convention::PathConvention;
use crate::path::cursor::SegmentCursor;
use crate::path::ops::PathOps;
use crate::path::segment::Segment;
use crate::path::writer::{render, render_owned, PathWriter};

/// How a cleaned path is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor<'a> {
    Relative,
    Separator,
    Drive(&'a str),
}

/// The segments that survive cleaning, in left-to-right order.
#[derive(Debug)]
struct Cleaned<'a> {
    convention: PathConvention,
    anchor: Anchor<'a>,
    kept: Vec<&'a str>,
}

impl<'a> Cleaned<'a> {
    /// Resolves the concatenation of `parts`, the first of which may be rooted.
    ///
    /// Empty parts must already be filtered out.
    fn resolve(convention: PathConvention, parts: &[&'a str]) -> Self {
        let mut anchor = Anchor::Relative;
        let mut kept = Vec::new();
        let mut pending = 0usize;

        for (index, &path) in parts.iter().enumerate().rev() {
            let Ok(mut cursor) = SegmentCursor::last(path) else {
                continue;
            };

            loop {
                let segment = cursor.segment();
                let text = cursor.text();

                if index == 0 && segment.offset == 0 {
                    if segment.is_empty() {
                        anchor = Anchor::Separator;
                        break;
                    }
                    if convention.is_root_segment(path, segment) {
                        anchor = Anchor::Drive(text);
                        break;
                    }
                }

                match text {
                    "" | "." => {}
                    ".." => pending += 1,
                    _ if pending > 0 => pending -= 1,
                    _ => kept.push(text),
                }

                if !cursor.retreat().moved() {
                    break;
                }
            }
        }

        if pending > 0 {
            log::trace!("dropping {pending} unmatched '..' segment(s)");
        }
        kept.reverse();
        Self {
            convention,
            anchor,
            kept,
        }
    }

    /// True if a relative result would start with a name that reads as a
    /// root, such as `C:` left over from `a/../C:`.
    fn needs_dot_prefix(&self) -> bool {
        self.anchor == Anchor::Relative
            && self.kept.first().is_some_and(|first| {
                self.convention
                    .is_root_segment(first, Segment::new(0, first.len()))
            })
    }

    fn emit(&self, out: &mut dyn PathWriter) {
        let mut needs_separator = match self.anchor {
            Anchor::Relative if self.needs_dot_prefix() => {
                out.push_str(".");
                true
            }
            Anchor::Relative => false,
            Anchor::Separator => {
                out.push_str("/");
                false
            }
            Anchor::Drive(drive) => {
                out.push_str(drive);
                true
            }
        };

        for segment in &self.kept {
            if needs_separator {
                out.push_str("/");
            }
            out.push_str(segment);
            needs_separator = true;
        }
    }
}

impl PathOps {
    /// Resolves `.` and `..` segments of `path` without touching the filesystem.
    ///
    /// The result uses `/` separators, never ends in a separator unless it is
    /// the bare root `/`, and is never longer than `path`. A path that
    /// resolves to nothing yields an empty string. A relative result whose
    /// first name looks like a drive keeps a leading `./` so that it stays
    /// relative.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.clean("my/messy/../path").unwrap(), "my/path");
    /// assert_eq!(ops.clean("my/messy/../../../path").unwrap(), "path");
    /// assert_eq!(ops.clean("C:\\Users\\..\\..").unwrap(), "C:");
    /// assert_eq!(ops.clean("./.").unwrap(), "");
    /// assert_eq!(ops.clean("a/../C:/x").unwrap(), "./C:/x");
    /// ```
    pub fn clean(&self, path: &str) -> Result<String> {
        let cleaned = self.resolve_clean(path)?;
        Ok(render_owned(|out| cleaned.emit(out)))
    }

    /// Bounded form of [`PathOps::clean`]: measures when `dst` is `None`,
    /// otherwise writes a NUL-terminated result into `dst`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty, or `OutOfRange` if the
    /// result does not fit in `dst`.
    pub fn clean_into(&self, dst: Option<&mut [u8]>, path: &str) -> Result<usize> {
        let cleaned = self.resolve_clean(path)?;
        render(dst, |out| cleaned.emit(out))
    }

    /// Appends `other` to `base` and cleans the result in one pass.
    ///
    /// The unclean concatenation is never built, so `..` segments in `other`
    /// consume segments of `base` directly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if both paths are empty, or if `other` is
    /// absolute while `base` is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.append_and_clean("/srv/www", "../logs/./today").unwrap(), "/srv/logs/today");
    /// assert!(ops.append_and_clean("/srv", "/etc").is_err());
    /// ```
    pub fn append_and_clean(&self, base: &str, other: &str) -> Result<String> {
        let cleaned = self.resolve_append_clean(base, other)?;
        Ok(render_owned(|out| cleaned.emit(out)))
    }

    /// Bounded form of [`PathOps::append_and_clean`].
    ///
    /// # Errors
    ///
    /// As [`PathOps::append_and_clean`], plus `OutOfRange` if the result does
    /// not fit in `dst`.
    pub fn append_and_clean_into(
        &self,
        dst: Option<&mut [u8]>,
        base: &str,
        other: &str,
    ) -> Result<usize> {
        let cleaned = self.resolve_append_clean(base, other)?;
        render(dst, |out| cleaned.emit(out))
    }

    fn resolve_clean<'a>(&self, path: &'a str) -> Result<Cleaned<'a>> {
        if path.is_empty() {
            return Err(Error::invalid("cannot clean an empty path"));
        }
        let cleaned = Cleaned::resolve(self.convention(), &[path]);
        log::trace!("clean {path:?}: kept {} segment(s)", cleaned.kept.len());
        Ok(cleaned)
    }

    fn resolve_append_clean<'a>(&self, base: &'a str, other: &'a str) -> Result<Cleaned<'a>> {
        if base.is_empty() && other.is_empty() {
            return Err(Error::invalid("cannot append two empty paths"));
        }
        if !base.is_empty() && self.is_absolute(other) {
            return Err(Error::invalid(format!(
                "cannot append absolute path {other:?} to {base:?}"
            )));
        }

        let parts: Vec<&str> = [base, other]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        let cleaned = Cleaned::resolve(self.convention(), &parts);
        log::trace!(
            "append and clean {base:?} + {other:?}: kept {} segment(s)",
            cleaned.kept.len()
        );
        Ok(cleaned)
    }
}
