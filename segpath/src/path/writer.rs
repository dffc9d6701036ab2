//! The measure/write protocol shared by every operation that produces a path.
//!
//! Each producing operation is written once against [`PathWriter`] and then
//! driven by one of three writers:
//!
//! - `String`: the owned result, for callers that can allocate.
//! - [`Measure`]: counts bytes without writing, to size a buffer up front.
//! - [`BoundedWriter`]: fills a caller-owned byte buffer and NUL-terminates
//!   it. If the result plus its terminator does not fit, the buffer is reset
//!   to an empty string and [`Error::OutOfRange`] is returned.
//!
//! Because the same emission code feeds all three, the measured length always
//! equals the written length.
//!
//! ```
//! use segpath::{PathOps, WriteTarget};
//!
//! let ops = PathOps::new();
//! let needed = ops.clean_into(None, "a/./b/../c").unwrap();
//! let mut buf = vec![0u8; needed + 1];
//! let written = ops.clean_into(Some(&mut buf), "a/./b/../c").unwrap();
//! assert_eq!(needed, written);
//! assert_eq!(&buf[..written], b"a/c");
//!
//! let mut small = [0u8; 3];
//! assert!(ops.clean_into(Some(&mut small), "a/./b/../c").unwrap_err().is_out_of_range());
//! assert_eq!(small[0], 0);
//! # let _ = WriteTarget::measure("x");
//! ```

use crate::error::{Error, Result};

/// A sink for path text.
pub trait PathWriter {
    /// Appends `s`.
    fn push_str(&mut self, s: &str);

    /// Logical length of everything pushed so far.
    fn len(&self) -> usize;

    /// True if nothing has been pushed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PathWriter for String {
    fn push_str(&mut self, s: &str) {
        String::push_str(self, s);
    }

    fn len(&self) -> usize {
        String::len(self)
    }
}

/// Measure mode: counts bytes, writes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measure {
    len: usize,
}

impl Measure {
    /// A fresh counter.
    #[must_use]
    pub const fn new() -> Self {
        Self { len: 0 }
    }
}

impl PathWriter for Measure {
    fn push_str(&mut self, s: &str) {
        self.len += s.len();
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Writes into a caller-owned buffer, reserving one byte for a NUL terminator.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BoundedWriter<'a> {
    /// A writer starting at the beginning of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// A writer that keeps the first `len` bytes of `buf` and appends after them.
    #[must_use]
    pub fn resume(buf: &'a mut [u8], len: usize) -> Self {
        Self { buf, len }
    }

    /// Capacity of the underlying buffer, terminator included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Terminates the result, or resets the buffer if it did not fit.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the result and its terminator exceed the
    /// buffer. The buffer then holds an empty string (when it has any room
    /// at all).
    pub fn finish(self) -> Result<usize> {
        if self.len < self.buf.len() {
            self.buf[self.len] = 0;
            return Ok(self.len);
        }

        if let Some(first) = self.buf.first_mut() {
            *first = 0;
        }
        log::debug!(
            "path of {} bytes does not fit in {} byte buffer",
            self.len,
            self.buf.len()
        );
        Err(Error::OutOfRange {
            required: self.len,
            capacity: self.buf.len(),
        })
    }
}

impl PathWriter for BoundedWriter<'_> {
    fn push_str(&mut self, s: &str) {
        let end = self.len + s.len();
        if end < self.buf.len() {
            self.buf[self.len..end].copy_from_slice(s.as_bytes());
        }
        self.len = end;
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Where a buffer-backed, in-place capable operation reads and writes.
///
/// This replaces "destination pointer equals source pointer" sniffing with an
/// explicit choice.
#[derive(Debug)]
pub enum WriteTarget<'a, 's> {
    /// Read `source` and write the result to `dst`, or only measure it when
    /// `dst` is `None`.
    NewBuffer {
        /// Destination buffer; `None` selects measure mode.
        dst: Option<&'a mut [u8]>,
        /// The primary input path.
        source: &'s str,
    },
    /// The buffer already holds the primary input as a NUL-terminated path
    /// and is rewritten in place.
    InPlace(&'a mut [u8]),
}

impl<'a, 's> WriteTarget<'a, 's> {
    /// Measure the result for `source` without writing.
    #[must_use]
    pub fn measure(source: &'s str) -> Self {
        Self::NewBuffer { dst: None, source }
    }

    /// Write the result for `source` into `dst`.
    #[must_use]
    pub fn new_buffer(dst: &'a mut [u8], source: &'s str) -> Self {
        Self::NewBuffer {
            dst: Some(dst),
            source,
        }
    }
}

/// Reads the NUL-terminated path held in `buf`.
///
/// A buffer without a NUL is taken to be full.
///
/// # Errors
///
/// Returns `InvalidArgument` if the bytes are not UTF-8.
pub fn buffer_str(buf: &[u8]) -> Result<&str> {
    let len = buffer_len(buf);
    std::str::from_utf8(&buf[..len])
        .map_err(|e| Error::invalid(format!("buffer does not hold a UTF-8 path: {e}")))
}

pub(crate) fn buffer_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// Runs `emit` in measure mode (`None`) or against a bounded buffer.
pub(crate) fn render<F>(dst: Option<&mut [u8]>, emit: F) -> Result<usize>
where
    F: FnOnce(&mut dyn PathWriter),
{
    match dst {
        None => {
            let mut measure = Measure::new();
            emit(&mut measure);
            Ok(measure.len())
        }
        Some(buf) => {
            let mut writer = BoundedWriter::new(buf);
            emit(&mut writer);
            writer.finish()
        }
    }
}

/// Runs `emit` into a fresh `String`.
pub(crate) fn render_owned<F>(emit: F) -> String
where
    F: FnOnce(&mut dyn PathWriter),
{
    let mut out = String::new();
    emit(&mut out);
    out
}
