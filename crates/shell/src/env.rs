// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the shell crate.

use std::path::PathBuf;

/// Pipe read size used when draining child output.
pub const DEFAULT_STREAM_BUFFER_SIZE: usize = 1 << 20;

/// Read buffer size: `KILN_STREAM_BUFFER_SIZE` (bytes, non-zero) > 1 MiB.
pub fn stream_buffer_size() -> usize {
    std::env::var("KILN_STREAM_BUFFER_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_STREAM_BUFFER_SIZE)
}

/// Directory holding per-user homes: `KILN_HOME_ROOT` > `/home`.
pub fn home_root() -> PathBuf {
    std::env::var("KILN_HOME_ROOT")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/home"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
