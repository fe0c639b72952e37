// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the process executor.

use super::*;

mod basic;
mod builder;
mod errors;
mod identity;

/// An executor running `script` through `sh -c`.
pub(crate) fn sh(script: &str) -> Executor {
    Executor::new(["sh", "-c", script])
}

/// Fresh stdout and stderr captures.
pub(crate) fn captures() -> (CaptureSink, CaptureSink) {
    (CaptureSink::new(), CaptureSink::new())
}
