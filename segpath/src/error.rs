//! Error types for the segpath library.
//!
//! Path operations only ever fail in two ways: the arguments do not make
//! sense together, or a caller-owned buffer is too small for the result.
//! The configuration layer adds I/O and parse failures on top of that.

use thiserror::Error;

/// Result type alias for operations that may fail with a segpath error.
///
/// # Examples
///
/// ```
/// use segpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(7)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the segpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The inputs are empty where a path is required, or contradict each
    /// other (e.g. appending an absolute path to a non-empty base).
    ///
    /// The destination is never partially written when this is returned.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the arguments were rejected.
        reason: String,
    },

    /// The destination buffer cannot hold the result and its terminator.
    ///
    /// The destination has been reset to an empty string.
    #[error("output of {required} bytes does not fit in a buffer of {capacity} bytes")]
    OutOfRange {
        /// Length of the result, excluding the terminator.
        required: usize,
        /// Capacity of the destination buffer.
        capacity: usize,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("rejecting path arguments: {reason}");
        Self::InvalidArgument { reason }
    }

    /// Check if error indicates rejected arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    ///
    /// let err = Error::InvalidArgument { reason: "empty path".to_string() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error indicates an undersized destination buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    ///
    /// let err = Error::OutOfRange { required: 10, capacity: 4 };
    /// assert!(err.is_out_of_range());
    /// ```
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
