// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

/// Run `f` with `key` set to `value` (or unset), restoring unset afterwards.
fn with_var<T>(key: &str, value: Option<&str>, f: impl FnOnce() -> T) -> T {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    let out = f();
    std::env::remove_var(key);
    out
}

#[test]
#[serial]
fn buffer_size() {
    let cases = [
        (None, DEFAULT_STREAM_BUFFER_SIZE),
        (Some("65536"), 65536),
        (Some("0"), DEFAULT_STREAM_BUFFER_SIZE),
        (Some("lots"), DEFAULT_STREAM_BUFFER_SIZE),
    ];
    for (value, expected) in cases {
        let size = with_var("KILN_STREAM_BUFFER_SIZE", value, stream_buffer_size);
        assert_eq!(size, expected, "KILN_STREAM_BUFFER_SIZE={value:?}");
    }
}

#[test]
#[serial]
fn home_root_override() {
    let cases = [
        (None, "/home"),
        (Some("/var/lib/homes"), "/var/lib/homes"),
        (Some(""), "/home"),
    ];
    for (value, expected) in cases {
        let root = with_var("KILN_HOME_ROOT", value, home_root);
        assert_eq!(root, PathBuf::from(expected), "KILN_HOME_ROOT={value:?}");
    }
}
