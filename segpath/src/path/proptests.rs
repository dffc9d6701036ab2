//! Property-based tests for path handling.
//!
//! The normalize module already has small always-on property tests for
//! cleaning. This module covers the cross-cutting properties: iteration,
//! equality, ancestry and the bounded writer agreement of every transform.

use super::cursor::{segments, SegmentCursor, Step};
use super::ops::PathOps;
use super::writer::WriteTarget;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(name_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

// Mixed separators, repeated separators, dot segments, drive-looking names
// anywhere in the path and optional roots.
fn messy_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("/"), Just("\\"), Just("C:/"), Just("d:\\")],
        prop::collection::vec(
            prop_oneof![
                3 => name_strategy(),
                1 => Just(".".to_string()),
                1 => Just("..".to_string()),
                1 => Just("C:".to_string()),
            ],
            1..10,
        ),
        prop::collection::vec(prop_oneof![Just("/"), Just("\\"), Just("//")], 9),
    )
        .prop_map(|(root, parts, seps)| {
            let mut path = root.to_string();
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    path.push_str(seps[i - 1]);
                }
                path.push_str(part);
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Cleaning is idempotent: clean(clean(p)) == clean(p)
    #[test]
    fn clean_idempotent(path in messy_path_strategy()) {
        let ops = PathOps::new();
        let once = ops.clean(&path).unwrap();
        if !once.is_empty() {
            let twice = ops.clean(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    // Cleaning never lengthens a path
    #[test]
    fn clean_bounded(path in messy_path_strategy()) {
        let cleaned = PathOps::new().clean(&path).unwrap();
        prop_assert!(cleaned.len() <= path.len());
    }

    // Cleaning keeps absolute paths absolute and relative paths relative
    #[test]
    fn clean_preserves_absoluteness(path in messy_path_strategy()) {
        let ops = PathOps::new();
        let cleaned = ops.clean(&path).unwrap();
        prop_assert_eq!(ops.is_absolute(&path), ops.is_absolute(&cleaned));
    }

    // Forward and backward iteration see the same segments
    #[test]
    fn segments_reverse_matches_forward(path in messy_path_strategy()) {
        let forward: Vec<_> = segments(&path).collect();
        let mut backward: Vec<_> = segments(&path).rev().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    // Walking a cursor to the end and back visits every segment once
    #[test]
    fn cursor_round_trip(path in messy_path_strategy()) {
        let mut cursor = SegmentCursor::first(&path).unwrap();
        let mut forward = 0;
        while cursor.advance() == Step::Moved {
            forward += 1;
        }
        let mut back = 0;
        while cursor.retreat() == Step::Moved {
            back += 1;
        }
        // Running off the end parks the cursor past the last segment
        prop_assert_eq!(back, forward + 1);
        prop_assert!(cursor.at_start());
    }

    // Equality ignores the choice of separator
    #[test]
    fn equality_separator_insensitive(path in messy_path_strategy()) {
        let ops = PathOps::new();
        prop_assert!(ops.path_equal(&path, &ops.to_back_slashes(&path)));
        prop_assert!(ops.path_equal(&path, &ops.to_forward_slashes(&path)));
    }

    // Every child is a descendant, and appending one name makes a child
    #[test]
    fn child_implies_descendant(parent in absolute_path_strategy(), name in name_strategy()) {
        let ops = PathOps::new();
        let child = ops.append(&parent, &name).unwrap();
        prop_assert!(ops.is_child(&child, &parent));
        prop_assert!(ops.is_descendant(&child, &parent));
        prop_assert!(!ops.is_child(&parent, &child));
        prop_assert!(ops.is_descendant(&parent, &parent));
    }

    // to_relative and to_absolute invert each other on clean absolute paths
    #[test]
    fn relative_then_absolute(path in absolute_path_strategy(), base in absolute_path_strategy()) {
        let ops = PathOps::new();
        let relative = ops.to_relative(&path, &base).unwrap();
        let absolute = ops.to_absolute(&relative, &base).unwrap();
        prop_assert!(ops.path_equal(&absolute, &path));
    }

    // Measure mode and write mode agree for every transform
    #[test]
    fn measure_matches_write(path in messy_path_strategy(), name in name_strategy()) {
        let ops = PathOps::new();

        let needed = ops.append_to(WriteTarget::measure(&path), &name).unwrap();
        let mut buf = vec![0u8; needed + 1];
        prop_assert_eq!(ops.append_to(WriteTarget::new_buffer(&mut buf, &path), &name).unwrap(), needed);

        let needed = ops.append_extension_to(WriteTarget::measure(&path), &name).unwrap();
        let mut buf = vec![0u8; needed + 1];
        prop_assert_eq!(ops.append_extension_to(WriteTarget::new_buffer(&mut buf, &path), &name).unwrap(), needed);

        let needed = ops.remove_extension_to(WriteTarget::measure(&path)).unwrap();
        let mut buf = vec![0u8; needed + 1];
        prop_assert_eq!(ops.remove_extension_to(WriteTarget::new_buffer(&mut buf, &path)).unwrap(), needed);

        if let Ok(needed) = ops.remove_file_name_to(WriteTarget::measure(&path)) {
            let mut buf = vec![0u8; needed + 1];
            prop_assert_eq!(ops.remove_file_name_to(WriteTarget::new_buffer(&mut buf, &path)).unwrap(), needed);
        }

        let needed = ops.append_and_clean_into(None, &path, &name).unwrap();
        let mut buf = vec![0u8; needed + 1];
        prop_assert_eq!(ops.append_and_clean_into(Some(&mut buf), &path, &name).unwrap(), needed);
    }

    // One byte short is always OutOfRange and leaves an empty string
    #[test]
    fn short_buffer_is_out_of_range(path in messy_path_strategy()) {
        let ops = PathOps::new();
        let needed = ops.copy_into(None, &path).unwrap();
        let mut buf = vec![0xffu8; needed];
        let err = ops.copy_into(Some(&mut buf), &path).unwrap_err();
        prop_assert!(err.is_out_of_range());
        prop_assert_eq!(buf[0], 0);
    }
}
