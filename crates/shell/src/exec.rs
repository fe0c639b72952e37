// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution with streamed output.
//!
//! [`Executor`] spawns one argument vector, optionally as another user and
//! in another directory, and feeds the child's stdout and stderr to two
//! [`OutputSink`]s while waiting for it to exit.

mod command;
mod error;
mod identity;
mod sink;

pub use command::{exec_command, Executor};
pub use error::ExecError;
pub use identity::{home_dir, user_name, Identity, IdentityError, ResolveUser, SystemUsers};
pub use sink::{CaptureSink, OutputSink, Stream, TraceSink};

#[cfg(test)]
#[path = "exec_tests/mod.rs"]
mod tests;
