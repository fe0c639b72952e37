// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln-shell: argument splitting and command execution for build directives.
//!
//! - [`split`] turns a directive's raw argument text into an argument vector,
//!   either plain (quotes stripped) or shell-aware (quotes kept, `&`/`|`/`;`
//!   as separate tokens).
//! - [`exec`] runs an argument vector as a child process, optionally as
//!   another user, streaming stdout and stderr into caller-supplied sinks.

pub mod env;
mod error;
pub mod exec;
mod span;
pub mod split;

pub use error::SplitError;
pub use exec::{exec_command, CaptureSink, ExecError, Executor, OutputSink, Stream};
pub use span::{context_snippet, diagnostic_context, locate_span, Span};
pub use split::{split_args, SplitMode};
