//! The convention-bearing entry point for all path operations.

use crate::config::Config;
use crate::path::convention::PathConvention;

/// Path operations bound to a [`PathConvention`].
///
/// Classification, normalization and transforms are all methods on this
/// type; see the `classify`, `normalize` and `transform` modules for the
/// individual groups.
///
/// # Examples
///
/// ```
/// use segpath::{PathConvention, PathOps};
///
/// let any = PathOps::new();
/// assert!(any.is_absolute("C:/Windows"));
///
/// let posix = PathOps::with_convention(PathConvention::Posix);
/// assert!(!posix.is_absolute("C:/Windows"));
/// assert_eq!(posix.clean("/usr/./lib/../bin").unwrap(), "/usr/bin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathOps {
    convention: PathConvention,
}

impl PathOps {
    /// Operations that accept both POSIX and drive-letter roots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            convention: PathConvention::Any,
        }
    }

    /// Operations using the given convention.
    #[must_use]
    pub const fn with_convention(convention: PathConvention) -> Self {
        Self { convention }
    }

    /// Operations using the convention selected by `config`, or the default.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_convention(config.convention.unwrap_or_default())
    }

    /// The convention in effect.
    #[must_use]
    pub const fn convention(&self) -> PathConvention {
        self.convention
    }
}
