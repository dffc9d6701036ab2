//! Operations that build a new path from one or two inputs.
//!
//! Every operation comes in an owned form and a bounded form. The bounded
//! form writes into a caller-owned buffer (or only measures, see
//! [`crate::path::writer`]); operations that can work on their own output
//! also accept [`WriteTarget::InPlace`].

use crate::error::{Error, Result};
use crate::path::classify::{extension, file_name};
use crate::path::convention::is_posix_root_segment;
use crate::path::cursor::SegmentCursor;
use crate::path::ops::PathOps;
use crate::path::segment::is_separator;
use crate::path::writer::{
    buffer_str, render, render_owned, BoundedWriter, PathWriter, WriteTarget,
};

impl PathOps {
    /// Returns an owned copy of `path`.
    #[must_use]
    pub fn copy(&self, path: &str) -> String {
        path.to_owned()
    }

    /// Bounded form of [`PathOps::copy`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `path` does not fit in `dst`.
    pub fn copy_into(&self, dst: Option<&mut [u8]>, path: &str) -> Result<usize> {
        render(dst, |out| out.push_str(path))
    }

    /// Replaces every `\` with `/`.
    #[must_use]
    pub fn to_forward_slashes(&self, path: &str) -> String {
        path.replace('\\', "/")
    }

    /// Bounded form of [`PathOps::to_forward_slashes`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the result does not fit in `dst`.
    pub fn to_forward_slashes_into(&self, dst: Option<&mut [u8]>, path: &str) -> Result<usize> {
        render(dst, |out| emit_replacing(out, path, '\\', "/"))
    }

    /// Replaces every `/` with `\`.
    #[must_use]
    pub fn to_back_slashes(&self, path: &str) -> String {
        path.replace('/', "\\")
    }

    /// Bounded form of [`PathOps::to_back_slashes`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the result does not fit in `dst`.
    pub fn to_back_slashes_into(&self, dst: Option<&mut [u8]>, path: &str) -> Result<usize> {
        render(dst, |out| emit_replacing(out, path, '/', "\\"))
    }

    /// Joins `other` onto `base` with exactly one separator.
    ///
    /// No separator is added when `base` is empty or already ends in one, and
    /// an empty `other` leaves `base` unchanged. Neither input is cleaned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `other` is absolute and `base` is not
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.append("C:/My", "Folder").unwrap(), "C:/My/Folder");
    /// assert_eq!(ops.append("/srv/", "www").unwrap(), "/srv/www");
    /// assert!(ops.append("/srv", "/www").is_err());
    /// ```
    pub fn append(&self, base: &str, other: &str) -> Result<String> {
        let separator = self.join_separator(base, other)?;
        Ok(format!("{base}{separator}{other}"))
    }

    /// Bounded form of [`PathOps::append`]; `base` is the target's source.
    ///
    /// # Errors
    ///
    /// As [`PathOps::append`], plus `OutOfRange` if the result does not fit.
    /// An in-place buffer that is not valid UTF-8 is `InvalidArgument`.
    pub fn append_to(&self, target: WriteTarget<'_, '_>, other: &str) -> Result<usize> {
        match target {
            WriteTarget::NewBuffer { dst, source } => {
                let separator = self.join_separator(source, other)?;
                render(dst, |out| {
                    out.push_str(source);
                    out.push_str(separator);
                    out.push_str(other);
                })
            }
            WriteTarget::InPlace(buf) => {
                let (len, separator) = {
                    let base = buffer_str(buf)?;
                    (base.len(), self.join_separator(base, other)?)
                };
                let mut out = BoundedWriter::resume(buf, len);
                out.push_str(separator);
                out.push_str(other);
                out.finish()
            }
        }
    }

    /// Appends the segment under `cursor` to `base`.
    ///
    /// # Errors
    ///
    /// As [`PathOps::append`].
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{PathOps, SegmentCursor};
    ///
    /// let ops = PathOps::new();
    /// let cursor = SegmentCursor::last("/var/log/syslog").unwrap();
    /// assert_eq!(ops.append_segment("/tmp", &cursor).unwrap(), "/tmp/syslog");
    /// ```
    pub fn append_segment(&self, base: &str, cursor: &SegmentCursor<'_>) -> Result<String> {
        self.append(base, cursor.text())
    }

    /// Bounded form of [`PathOps::append_segment`].
    ///
    /// # Errors
    ///
    /// As [`PathOps::append_to`].
    pub fn append_segment_to(
        &self,
        target: WriteTarget<'_, '_>,
        cursor: &SegmentCursor<'_>,
    ) -> Result<usize> {
        self.append_to(target, cursor.text())
    }

    /// Adds `.` and `ext` to the end of `base`; an empty `ext` changes nothing.
    #[must_use]
    pub fn append_extension(&self, base: &str, ext: &str) -> String {
        if ext.is_empty() {
            base.to_owned()
        } else {
            format!("{base}.{ext}")
        }
    }

    /// Bounded form of [`PathOps::append_extension`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the result does not fit, or `InvalidArgument`
    /// if an in-place buffer is not valid UTF-8.
    pub fn append_extension_to(&self, target: WriteTarget<'_, '_>, ext: &str) -> Result<usize> {
        let emit_ext = |out: &mut dyn PathWriter| {
            if !ext.is_empty() {
                out.push_str(".");
                out.push_str(ext);
            }
        };

        match target {
            WriteTarget::NewBuffer { dst, source } => render(dst, |out| {
                out.push_str(source);
                emit_ext(out);
            }),
            WriteTarget::InPlace(buf) => {
                let len = buffer_str(buf)?.len();
                let mut out = BoundedWriter::resume(buf, len);
                emit_ext(&mut out);
                out.finish()
            }
        }
    }

    /// `path` without its extension and the `.` before it.
    ///
    /// A path without an extension is returned whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.remove_extension("/data/archive.tar.gz"), "/data/archive.tar");
    /// assert_eq!(ops.remove_extension("/home/.bashrc"), "/home/.bashrc");
    /// ```
    #[must_use]
    pub fn remove_extension<'a>(&self, path: &'a str) -> &'a str {
        &path[..extension_cut(path)]
    }

    /// Strips the extension from `path` without reallocating.
    pub fn remove_extension_in_place(&self, path: &mut String) {
        let cut = extension_cut(path);
        path.truncate(cut);
    }

    /// Bounded form of [`PathOps::remove_extension`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the result does not fit, or `InvalidArgument`
    /// if an in-place buffer is not valid UTF-8.
    pub fn remove_extension_to(&self, target: WriteTarget<'_, '_>) -> Result<usize> {
        truncate_to(target, |path| Ok(extension_cut(path)))
    }

    /// `path` without its last segment.
    ///
    /// The separator before the removed segment goes too, except when it is
    /// the root separator. A single relative segment leaves an empty path.
    /// Under [`Windows`](crate::PathConvention::Windows) a lone separator
    /// is not a root, so `/` counts as one empty segment and yields an empty
    /// path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `path` is empty or is only a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.remove_file_name("/a/b/c").unwrap(), "/a/b");
    /// assert_eq!(ops.remove_file_name("/a").unwrap(), "/");
    /// assert!(ops.remove_file_name("/").is_err());
    /// ```
    pub fn remove_file_name<'a>(&self, path: &'a str) -> Result<&'a str> {
        let cut = self.file_name_cut(path)?;
        Ok(&path[..cut])
    }

    /// Removes the last segment of `path` without reallocating.
    ///
    /// # Errors
    ///
    /// As [`PathOps::remove_file_name`]; `path` is untouched on error.
    pub fn remove_file_name_in_place(&self, path: &mut String) -> Result<()> {
        let cut = self.file_name_cut(path)?;
        path.truncate(cut);
        Ok(())
    }

    /// Bounded form of [`PathOps::remove_file_name`].
    ///
    /// # Errors
    ///
    /// As [`PathOps::remove_file_name`], plus `OutOfRange` if the result
    /// does not fit.
    pub fn remove_file_name_to(&self, target: WriteTarget<'_, '_>) -> Result<usize> {
        truncate_to(target, |path| self.file_name_cut(path))
    }

    /// The directory part of `path`: everything before the last separator,
    /// without trailing separators.
    ///
    /// Unlike [`PathOps::remove_file_name`] this is purely textual and never
    /// fails; `/name` has an empty base path.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.base_path("C:/MyFolder////MyFile"), "C:/MyFolder");
    /// assert_eq!(ops.base_path("file.txt"), "");
    /// ```
    #[must_use]
    pub fn base_path<'a>(&self, path: &'a str) -> &'a str {
        let end = path.rfind(['/', '\\']).unwrap_or(0);
        path[..end].trim_end_matches(['/', '\\'])
    }

    /// Bounded form of [`PathOps::base_path`].
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the result does not fit in `dst`.
    pub fn base_path_into(&self, dst: Option<&mut [u8]>, path: &str) -> Result<usize> {
        let base = self.base_path(path);
        render(dst, |out| out.push_str(base))
    }

    /// The file name of `path` without its extension.
    #[must_use]
    pub fn file_name_without_extension<'a>(&self, path: &'a str) -> &'a str {
        let name = file_name(path);
        &name[..extension_cut(name)]
    }

    /// Expresses `path` relative to `base`.
    ///
    /// The shared leading segments are skipped, then one `..` is emitted per
    /// remaining segment of `base`, followed by the remaining segments of
    /// `path`. Both inputs are expected to be absolute and clean.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if both paths are empty, or if they do not
    /// even share their first segment (including an empty `path`).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.to_relative("/a/b/c", "/a/b").unwrap(), "c");
    /// assert_eq!(ops.to_relative("/a/b", "/a/b/c").unwrap(), "..");
    /// assert_eq!(ops.to_relative("/a/x/y", "/a/b/c").unwrap(), "../../x/y");
    /// assert!(ops.to_relative("C:/a", "/a").is_err());
    /// ```
    pub fn to_relative(&self, path: &str, base: &str) -> Result<String> {
        let walk = RelativeWalk::new(path, base)?;
        Ok(render_owned(|out| walk.emit(out)))
    }

    /// Bounded form of [`PathOps::to_relative`].
    ///
    /// # Errors
    ///
    /// As [`PathOps::to_relative`], plus `OutOfRange` if the result does not
    /// fit in `dst`.
    pub fn to_relative_into(&self, dst: Option<&mut [u8]>, path: &str, base: &str) -> Result<usize> {
        let walk = RelativeWalk::new(path, base)?;
        render(dst, |out| walk.emit(out))
    }

    /// Resolves `path` against `base`; the same as
    /// [`PathOps::append_and_clean`] with the arguments swapped.
    ///
    /// # Errors
    ///
    /// As [`PathOps::append_and_clean`].
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::PathOps;
    ///
    /// let ops = PathOps::new();
    /// assert_eq!(ops.to_absolute("../lib", "/usr/bin").unwrap(), "/usr/lib");
    /// ```
    pub fn to_absolute(&self, path: &str, base: &str) -> Result<String> {
        self.append_and_clean(base, path)
    }

    /// Bounded form of [`PathOps::to_absolute`].
    ///
    /// # Errors
    ///
    /// As [`PathOps::append_and_clean_into`].
    pub fn to_absolute_into(&self, dst: Option<&mut [u8]>, path: &str, base: &str) -> Result<usize> {
        self.append_and_clean_into(dst, base, path)
    }

    fn join_separator(&self, base: &str, other: &str) -> Result<&'static str> {
        if !base.is_empty() && self.is_absolute(other) {
            return Err(Error::invalid(format!(
                "cannot append absolute path {other:?} to non-empty base {base:?}"
            )));
        }

        let base_ends_in_separator = base.as_bytes().last().copied().is_some_and(is_separator);
        if other.is_empty() || base.is_empty() || base_ends_in_separator {
            Ok("")
        } else {
            Ok("/")
        }
    }

    /// Length of `path` once its last segment is removed.
    fn file_name_cut(&self, path: &str) -> Result<usize> {
        let last = SegmentCursor::last(path)
            .map_err(|_| Error::invalid("cannot remove the file name of an empty path"))?;
        if self.is_root_segment(path, last.segment()) {
            return Err(Error::invalid(format!(
                "{path:?} is a root and has no file name"
            )));
        }

        let mut prev = last;
        if !prev.retreat().moved() {
            return Ok(0);
        }
        if is_posix_root_segment(path, prev.segment()) {
            Ok(last.segment().offset)
        } else {
            Ok(prev.segment().end())
        }
    }
}

/// Length of `path` without its extension and the `.` before it.
fn extension_cut(path: &str) -> usize {
    let ext = extension(path);
    if ext.is_empty() {
        path.len()
    } else {
        path.len() - ext.len() - 1
    }
}

fn emit_replacing(out: &mut dyn PathWriter, path: &str, from: char, to: &str) {
    let mut pieces = path.split(from);
    if let Some(first) = pieces.next() {
        out.push_str(first);
    }
    for piece in pieces {
        out.push_str(to);
        out.push_str(piece);
    }
}

/// Writes a prefix of the target's path, `cut` bytes long.
fn truncate_to<F>(target: WriteTarget<'_, '_>, cut: F) -> Result<usize>
where
    F: FnOnce(&str) -> Result<usize>,
{
    match target {
        WriteTarget::NewBuffer { dst, source } => {
            let len = cut(source)?;
            render(dst, |out| out.push_str(&source[..len]))
        }
        WriteTarget::InPlace(buf) => {
            let len = cut(buffer_str(buf)?)?;
            BoundedWriter::resume(buf, len).finish()
        }
    }
}

/// Cursor positions once the common prefix of `path` and `base` is skipped.
struct RelativeWalk<'a, 'b> {
    path: SegmentCursor<'a>,
    /// `None` when `base` is empty.
    base: Option<SegmentCursor<'b>>,
}

impl<'a, 'b> RelativeWalk<'a, 'b> {
    fn new(path: &'a str, base: &'b str) -> Result<Self> {
        if path.is_empty() && base.is_empty() {
            return Err(Error::invalid("cannot relate two empty paths"));
        }
        let unrelated = || {
            Error::invalid(format!("{path:?} cannot be expressed relative to {base:?}"))
        };

        let mut path_cursor = SegmentCursor::first(path).map_err(|_| unrelated())?;

        let Ok(mut base_cursor) = SegmentCursor::first(base) else {
            // An empty base matches only the empty root of `path`.
            if !path_cursor.segment().is_empty() {
                return Err(unrelated());
            }
            let _ = path_cursor.advance();
            return Ok(Self {
                path: path_cursor,
                base: None,
            });
        };

        let mut path_done = false;
        let mut base_done = false;
        while !path_done && !base_done && path_cursor.iterators_equal(&base_cursor) {
            path_done = !path_cursor.advance().moved();
            base_done = !base_cursor.advance().moved();
        }

        if path_cursor.segment().offset == 0 {
            return Err(unrelated());
        }

        Ok(Self {
            path: path_cursor,
            base: Some(base_cursor),
        })
    }

    fn emit(&self, out: &mut dyn PathWriter) {
        let mut written = 0usize;

        if let Some(mut base) = self.base {
            if !base.at_end() {
                loop {
                    if written > 0 {
                        out.push_str("/");
                    }
                    out.push_str("..");
                    written += 1;
                    if !base.advance().moved() {
                        break;
                    }
                }
            }
        }

        let mut path = self.path;
        if !path.at_end() {
            loop {
                if written > 0 {
                    out.push_str("/");
                }
                out.push_str(path.text());
                written += 1;
                if !path.advance().moved() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::convention::PathConvention;

    fn ops() -> PathOps {
        PathOps::new()
    }

    #[test]
    fn test_copy_and_slashes() {
        let ops = ops();
        assert_eq!(ops.copy("a\\b"), "a\\b");
        assert_eq!(ops.to_forward_slashes("C:\\My\\Folder"), "C:/My/Folder");
        assert_eq!(ops.to_back_slashes("/a/b"), "\\a\\b");

        let mut buf = [0u8; 8];
        assert_eq!(ops.to_forward_slashes_into(Some(&mut buf), "a\\\\b").unwrap(), 4);
        assert_eq!(&buf[..5], b"a//b\0");
        assert_eq!(ops.to_back_slashes_into(None, "/x/").unwrap(), 3);
        assert_eq!(ops.copy_into(None, "").unwrap(), 0);
    }

    #[test]
    fn test_append() {
        let ops = ops();
        assert_eq!(ops.append("C:/My", "Folder").unwrap(), "C:/My/Folder");
        assert_eq!(ops.append("a\\", "b").unwrap(), "a\\b");
        assert_eq!(ops.append("", "/abs").unwrap(), "/abs");
        assert_eq!(ops.append("base", "").unwrap(), "base");
        assert_eq!(ops.append("a", "../b").unwrap(), "a/../b");
    }

    #[test]
    fn test_append_rejects_absolute_other() {
        let ops = ops();
        assert!(ops.append("/a", "/b").unwrap_err().is_invalid_argument());
        assert!(ops.append("a", "C:/b").unwrap_err().is_invalid_argument());

        let windows = PathOps::with_convention(PathConvention::Windows);
        assert_eq!(windows.append("C:/a", "/b").unwrap(), "C:/a//b");
    }

    #[test]
    fn test_append_to_new_buffer() {
        let ops = ops();
        assert_eq!(ops.append_to(WriteTarget::measure("C:/My"), "Folder").unwrap(), 12);

        let mut buf = [0u8; 13];
        let written = ops
            .append_to(WriteTarget::new_buffer(&mut buf, "C:/My"), "Folder")
            .unwrap();
        assert_eq!(&buf[..=written], b"C:/My/Folder\0");

        let mut small = [0xffu8; 12];
        let err = ops
            .append_to(WriteTarget::new_buffer(&mut small, "C:/My"), "Folder")
            .unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(small[0], 0);
    }

    #[test]
    fn test_append_to_in_place() {
        let ops = ops();
        let mut buf = [0u8; 16];
        buf[..5].copy_from_slice(b"/home");
        assert_eq!(ops.append_to(WriteTarget::InPlace(&mut buf), "user").unwrap(), 10);
        assert_eq!(buffer_str(&buf).unwrap(), "/home/user");

        let mut full = *b"/a\0";
        assert!(ops
            .append_to(WriteTarget::InPlace(&mut full), "b")
            .unwrap_err()
            .is_out_of_range());
        assert_eq!(full[0], 0);
    }

    #[test]
    fn test_append_in_place_rejects_before_writing() {
        let mut buf = *b"/a\0\0\0\0";
        let err = ops()
            .append_to(WriteTarget::InPlace(&mut buf), "/b")
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(&buf[..3], b"/a\0");
    }

    #[test]
    fn test_append_segment() {
        let ops = ops();
        let mut cursor = SegmentCursor::first("src/lib.rs").unwrap();
        assert_eq!(ops.append_segment("/repo", &cursor).unwrap(), "/repo/src");
        assert!(cursor.advance().moved());
        let mut buf = [0u8; 32];
        let n = ops
            .append_segment_to(WriteTarget::new_buffer(&mut buf, "/repo"), &cursor)
            .unwrap();
        assert_eq!(&buf[..n], b"/repo/lib.rs");
    }

    #[test]
    fn test_append_extension() {
        let ops = ops();
        assert_eq!(ops.append_extension("notes", "txt"), "notes.txt");
        assert_eq!(ops.append_extension("notes", ""), "notes");

        let mut buf = [0u8; 16];
        buf[..5].copy_from_slice(b"image");
        let n = ops
            .append_extension_to(WriteTarget::InPlace(&mut buf), "png")
            .unwrap();
        assert_eq!(&buf[..=n], b"image.png\0");
        assert_eq!(ops.append_extension_to(WriteTarget::measure("a"), "").unwrap(), 1);
    }

    #[test]
    fn test_remove_extension() {
        let ops = ops();
        assert_eq!(ops.remove_extension("filename.ext1.ext2"), "filename.ext1");
        assert_eq!(ops.remove_extension("/dir.d/file"), "/dir.d/file");
        assert_eq!(ops.remove_extension(".bashrc"), ".bashrc");
        assert_eq!(ops.remove_extension("trailing."), "trailing.");

        let mut owned = String::from("report.pdf");
        ops.remove_extension_in_place(&mut owned);
        assert_eq!(owned, "report");
    }

    #[test]
    fn test_remove_extension_to() {
        let ops = ops();
        let mut buf = *b"a/b.txt\0";
        assert_eq!(ops.remove_extension_to(WriteTarget::InPlace(&mut buf)).unwrap(), 3);
        assert_eq!(buffer_str(&buf).unwrap(), "a/b");

        assert_eq!(ops.remove_extension_to(WriteTarget::measure("x.y")).unwrap(), 1);
        let mut out = [0u8; 4];
        assert_eq!(
            ops.remove_extension_to(WriteTarget::new_buffer(&mut out, "abc"))
                .unwrap(),
            3
        );
        assert_eq!(&out, b"abc\0");
    }

    #[test]
    fn test_remove_file_name() {
        let ops = ops();
        assert_eq!(ops.remove_file_name("/a/b/c").unwrap(), "/a/b");
        assert_eq!(ops.remove_file_name("/a").unwrap(), "/");
        assert_eq!(ops.remove_file_name("C:/a").unwrap(), "C:");
        assert_eq!(ops.remove_file_name("a//b/").unwrap(), "a");
        assert_eq!(ops.remove_file_name("name").unwrap(), "");
    }

    #[test]
    fn test_remove_file_name_rejects_roots() {
        let ops = ops();
        assert!(ops.remove_file_name("/").unwrap_err().is_invalid_argument());
        assert!(ops.remove_file_name("C:\\").unwrap_err().is_invalid_argument());
        assert!(ops.remove_file_name("").unwrap_err().is_invalid_argument());

        let mut root = String::from("/");
        assert!(ops.remove_file_name_in_place(&mut root).is_err());
        assert_eq!(root, "/");
    }

    #[test]
    fn test_remove_file_name_windows_lone_separator() {
        let windows = PathOps::with_convention(PathConvention::Windows);
        assert_eq!(windows.remove_file_name("/").unwrap(), "");
        assert!(windows.remove_file_name("C:\\").is_err());
        assert_eq!(PathOps::new().remove_file_name("/").ok(), None);
    }

    #[test]
    fn test_remove_file_name_in_place_forms() {
        let ops = ops();
        let mut owned = String::from("/var/log/syslog");
        ops.remove_file_name_in_place(&mut owned).unwrap();
        assert_eq!(owned, "/var/log");

        let mut buf = *b"/var/log\0\0";
        assert_eq!(ops.remove_file_name_to(WriteTarget::InPlace(&mut buf)).unwrap(), 4);
        assert_eq!(buffer_str(&buf).unwrap(), "/var");

        let mut no_nul = *b"ab/c";
        assert_eq!(ops.remove_file_name_to(WriteTarget::InPlace(&mut no_nul)).unwrap(), 2);
        assert_eq!(&no_nul[..3], b"ab\0");
    }

    #[test]
    fn test_base_path_and_stem() {
        let ops = ops();
        assert_eq!(ops.base_path("C:/MyFolder/MyFile"), "C:/MyFolder");
        assert_eq!(ops.base_path("C:/MyFolder////MyFile"), "C:/MyFolder");
        assert_eq!(ops.base_path("/MyFolder"), "");
        assert_eq!(ops.base_path("a/b/"), "a/b");
        assert_eq!(ops.base_path_into(None, "x/y").unwrap(), 1);

        assert_eq!(ops.file_name_without_extension("/a/b/photo.jpg"), "photo");
        assert_eq!(ops.file_name_without_extension("/a/b/.hidden"), ".hidden");
        assert_eq!(ops.file_name_without_extension("c.tar.gz"), "c.tar");
    }

    #[test]
    fn test_to_relative() {
        let ops = ops();
        assert_eq!(ops.to_relative("/a/b/c", "/a/b").unwrap(), "c");
        assert_eq!(ops.to_relative("/a/b", "/a/b/c").unwrap(), "..");
        assert_eq!(ops.to_relative("/a/b", "/a/b").unwrap(), "");
        assert_eq!(ops.to_relative("/a/x/y", "/a/b/c").unwrap(), "../../x/y");
        assert_eq!(ops.to_relative("C:\\a\\b", "C:/a").unwrap(), "b");
    }

    #[test]
    fn test_to_relative_empty_base() {
        let ops = ops();
        assert_eq!(ops.to_relative("/a/b", "").unwrap(), "a/b");
        assert!(ops.to_relative("a/b", "").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_to_relative_rejections() {
        let ops = ops();
        assert!(ops.to_relative("", "").unwrap_err().is_invalid_argument());
        assert!(ops.to_relative("", "/a").unwrap_err().is_invalid_argument());
        assert!(ops.to_relative("/a", "C:/a").unwrap_err().is_invalid_argument());
        assert!(ops.to_relative("x/y", "z/y").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_to_relative_into_agrees() {
        let ops = ops();
        let needed = ops.to_relative_into(None, "/a/x/y", "/a/b/c").unwrap();
        let mut buf = vec![0u8; needed + 1];
        let written = ops
            .to_relative_into(Some(&mut buf), "/a/x/y", "/a/b/c")
            .unwrap();
        assert_eq!(needed, written);
        assert_eq!(&buf[..written], b"../../x/y");
    }

    #[test]
    fn test_to_absolute() {
        let ops = ops();
        assert_eq!(ops.to_absolute("../lib", "/usr/bin").unwrap(), "/usr/lib");
        assert_eq!(ops.to_absolute("Folder", "C:/My").unwrap(), "C:/My/Folder");
        assert!(ops.to_absolute("/etc", "/usr").is_err());

        let mut buf = [0u8; 9];
        assert_eq!(ops.to_absolute_into(Some(&mut buf), "./lib", "/usr").unwrap(), 8);
        assert_eq!(&buf, b"/usr/lib\0");
    }
}
