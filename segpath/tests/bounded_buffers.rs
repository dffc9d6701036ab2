//! Integration tests for the measure/write protocol.
//!
//! Every producing operation is driven twice: once in measure mode to size
//! the buffer and once to fill it. Short buffers must fail with `OutOfRange`
//! and leave an empty, terminated string behind.

use segpath::{buffer_str, Error, PathOps, WriteTarget};

/// Measure, allocate exactly, write, and return the written text.
fn measure_then_write<F>(mut op: F) -> String
where
    F: FnMut(Option<&mut [u8]>) -> segpath::Result<usize>,
{
    let needed = op(None).unwrap();
    let mut buf = vec![0xaau8; needed + 1];
    let written = op(Some(&mut buf)).unwrap();
    assert_eq!(needed, written);
    assert_eq!(buf[written], 0);
    buffer_str(&buf).unwrap().to_string()
}

#[test]
fn test_two_pass_for_every_buffered_operation() {
    let ops = PathOps::new();

    assert_eq!(measure_then_write(|dst| ops.clean_into(dst, "/a/./b/../c")), "/a/c");
    assert_eq!(
        measure_then_write(|dst| ops.append_and_clean_into(dst, "/a/b", "../c")),
        "/a/c"
    );
    assert_eq!(
        measure_then_write(|dst| ops.to_relative_into(dst, "/a/x", "/a/b")),
        "../x"
    );
    assert_eq!(
        measure_then_write(|dst| ops.to_absolute_into(dst, "x", "/a")),
        "/a/x"
    );
    assert_eq!(measure_then_write(|dst| ops.copy_into(dst, "a\\b")), "a\\b");
    assert_eq!(
        measure_then_write(|dst| ops.to_forward_slashes_into(dst, "a\\b")),
        "a/b"
    );
    assert_eq!(
        measure_then_write(|dst| ops.to_back_slashes_into(dst, "a/b")),
        "a\\b"
    );
    assert_eq!(
        measure_then_write(|dst| ops.base_path_into(dst, "/a/b/c.txt")),
        "/a/b"
    );
}

#[test]
fn test_two_pass_for_write_target_operations() {
    let ops = PathOps::new();

    let appended = measure_then_write(|dst| {
        ops.append_to(WriteTarget::NewBuffer { dst, source: "C:/My" }, "Folder")
    });
    assert_eq!(appended, "C:/My/Folder");

    let with_ext = measure_then_write(|dst| {
        ops.append_extension_to(WriteTarget::NewBuffer { dst, source: "a/b" }, "txt")
    });
    assert_eq!(with_ext, "a/b.txt");

    let without_ext = measure_then_write(|dst| {
        ops.remove_extension_to(WriteTarget::NewBuffer { dst, source: "a/b.txt" })
    });
    assert_eq!(without_ext, "a/b");

    let parent = measure_then_write(|dst| {
        ops.remove_file_name_to(WriteTarget::NewBuffer { dst, source: "/a/b" })
    });
    assert_eq!(parent, "/a");
}

#[test]
fn test_short_buffer_resets_destination() {
    let ops = PathOps::new();
    let mut buf = [b'x'; 4];

    let err = ops.append_and_clean_into(Some(&mut buf), "/long", "path").unwrap_err();
    match err {
        Error::OutOfRange { required, capacity } => {
            assert_eq!(required, 10);
            assert_eq!(capacity, 4);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
    assert_eq!(buffer_str(&buf).unwrap(), "");
}

#[test]
fn test_argument_errors_leave_destination_untouched() {
    let ops = PathOps::new();
    let mut buf = *b"keep\0";

    assert!(ops.clean_into(Some(&mut buf), "").unwrap_err().is_invalid_argument());
    assert!(ops
        .to_relative_into(Some(&mut buf), "", "")
        .unwrap_err()
        .is_invalid_argument());
    assert!(ops
        .append_to(WriteTarget::new_buffer(&mut buf, "/a"), "/b")
        .unwrap_err()
        .is_invalid_argument());

    assert_eq!(buffer_str(&buf).unwrap(), "keep");
}

#[test]
fn test_in_place_pipeline() {
    let ops = PathOps::new();
    let mut buf = [0u8; 32];
    buf[..4].copy_from_slice(b"/var");

    ops.append_to(WriteTarget::InPlace(&mut buf), "log").unwrap();
    ops.append_to(WriteTarget::InPlace(&mut buf), "app.log").unwrap();
    ops.append_extension_to(WriteTarget::InPlace(&mut buf), "1").unwrap();
    assert_eq!(buffer_str(&buf).unwrap(), "/var/log/app.log.1");

    ops.remove_extension_to(WriteTarget::InPlace(&mut buf)).unwrap();
    assert_eq!(buffer_str(&buf).unwrap(), "/var/log/app.log");

    ops.remove_file_name_to(WriteTarget::InPlace(&mut buf)).unwrap();
    assert_eq!(buffer_str(&buf).unwrap(), "/var/log");
}

#[test]
fn test_in_place_rejects_non_utf8() {
    let ops = PathOps::new();
    let mut buf = [0xc3u8, 0x28, 0, 0];
    assert!(ops
        .remove_extension_to(WriteTarget::InPlace(&mut buf))
        .unwrap_err()
        .is_invalid_argument());
}
