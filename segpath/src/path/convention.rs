//! Root recognition conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::segment::{is_separator, Segment};

/// Which kinds of root segment a path may start with.
///
/// Both `/` and `\` are accepted as separators under every convention; the
/// convention only decides what counts as a root.
///
/// # Examples
///
/// ```
/// use segpath::PathConvention;
///
/// assert!(PathConvention::Any.accepts_drive_roots());
/// assert!(!PathConvention::Posix.accepts_drive_roots());
/// assert_eq!("windows".parse::<PathConvention>().unwrap(), PathConvention::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathConvention {
    /// Only a leading separator (`/a/b`) makes a path absolute.
    Posix,
    /// Only a drive letter prefix (`C:/a/b`) makes a path absolute.
    Windows,
    /// Either form is accepted.
    #[default]
    Any,
}

impl PathConvention {
    /// Whether a leading separator is a root segment.
    #[must_use]
    pub const fn accepts_posix_roots(self) -> bool {
        matches!(self, Self::Posix | Self::Any)
    }

    /// Whether a `<letter>:` prefix is a root segment.
    #[must_use]
    pub const fn accepts_drive_roots(self) -> bool {
        matches!(self, Self::Windows | Self::Any)
    }

    /// Checks `segment` of `path` against the enabled root kinds.
    #[must_use]
    pub fn is_root_segment(self, path: &str, segment: Segment) -> bool {
        (self.accepts_posix_roots() && is_posix_root_segment(path, segment))
            || (self.accepts_drive_roots() && is_drive_root_segment(path, segment))
    }
}

/// The empty segment at offset 0 of a path that begins with a separator.
pub(crate) fn is_posix_root_segment(path: &str, segment: Segment) -> bool {
    segment.offset == 0
        && segment.length == 0
        && path.as_bytes().first().copied().is_some_and(is_separator)
}

/// A two byte `<letter>:` segment at offset 0.
pub(crate) fn is_drive_root_segment(path: &str, segment: Segment) -> bool {
    let bytes = path.as_bytes();
    segment.offset == 0
        && segment.length == 2
        && bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
}

impl fmt::Display for PathConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl FromStr for PathConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            "any" | "both" => Ok(Self::Any),
            _ => Err(Error::Validation {
                field: "convention".into(),
                message: format!("unknown path convention '{s}' (expected posix, windows or any)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_any() {
        assert_eq!(PathConvention::default(), PathConvention::Any);
    }

    #[test]
    fn test_parse_and_display() {
        for convention in [
            PathConvention::Posix,
            PathConvention::Windows,
            PathConvention::Any,
        ] {
            let parsed: PathConvention = convention.to_string().parse().unwrap();
            assert_eq!(parsed, convention);
        }
        assert_eq!("UNIX".parse::<PathConvention>().unwrap(), PathConvention::Posix);
        assert!("vms".parse::<PathConvention>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let c: PathConvention = serde_yaml::from_str("windows").unwrap();
        assert_eq!(c, PathConvention::Windows);
        assert!(serde_yaml::to_string(&PathConvention::Posix)
            .unwrap()
            .contains("posix"));
    }

    #[test]
    fn test_root_segments_by_convention() {
        let root = Segment::new(0, 0);
        let drive = Segment::new(0, 2);

        assert!(PathConvention::Posix.is_root_segment("/a", root));
        assert!(!PathConvention::Posix.is_root_segment("C:/a", drive));

        assert!(!PathConvention::Windows.is_root_segment("/a", root));
        assert!(PathConvention::Windows.is_root_segment("C:/a", drive));

        assert!(PathConvention::Any.is_root_segment("\\a", root));
        assert!(PathConvention::Any.is_root_segment("z:", drive));
    }

    #[test]
    fn test_drive_requires_letter_and_colon() {
        let drive = Segment::new(0, 2);
        assert!(!is_drive_root_segment("1:/a", drive));
        assert!(!is_drive_root_segment("ab/c", drive));
        assert!(!is_drive_root_segment("C:", Segment::new(1, 2)));
    }

    #[test]
    fn test_empty_segment_of_relative_path_is_not_root() {
        assert!(!is_posix_root_segment("a/b", Segment::new(0, 0)));
        assert!(!is_posix_root_segment("", Segment::new(0, 0)));
    }
}
