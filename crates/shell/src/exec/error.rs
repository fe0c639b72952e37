// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use super::identity::IdentityError;
use super::sink::Stream;

/// Errors that can occur while running a command.
///
/// [`ExecError::CommandFailed`] means the process ran and exited non-zero;
/// every other variant means it could not be run or observed properly.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The argument vector was empty.
    #[error("empty command")]
    EmptyCommand,

    /// The target user could not be mapped to numeric ids.
    #[error("cmd user resolve `{user}`: {source}")]
    ResolveUser { user: String, source: IdentityError },

    /// Command not found or could not be spawned.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed { command: String, source: std::io::Error },

    /// Waiting for the child failed for a reason other than its exit status.
    #[error("failed to wait for `{command}`: {source}")]
    WaitFailed { command: String, source: std::io::Error },

    /// Reading one of the child's output pipes failed.
    #[error("failed to stream {stream} from `{command}`: {source}")]
    Stream { command: String, stream: Stream, source: std::io::Error },

    /// The command exited with non-zero status (`-1` when killed by a signal).
    #[error("command `{command}` exited with {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },
}

impl ExecError {
    /// The exit code, when the command ran and failed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::CommandFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// True when the command ran but exited non-zero.
    pub fn is_exit_failure(&self) -> bool {
        matches!(self, ExecError::CommandFailed { .. })
    }

    /// The program (argv\[0\]) this error is about, if it got that far.
    pub fn command(&self) -> Option<&str> {
        match self {
            ExecError::EmptyCommand | ExecError::ResolveUser { .. } => None,
            ExecError::SpawnFailed { command, .. }
            | ExecError::WaitFailed { command, .. }
            | ExecError::Stream { command, .. }
            | ExecError::CommandFailed { command, .. } => Some(command),
        }
    }
}
