// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for failures that happen before the child runs.

use super::captures;
use crate::exec::{ExecError, Executor, Identity, IdentityError};

#[tokio::test]
async fn spawn_failed_command_not_found() {
    let (out, err) = captures();
    let result = Executor::new(["kiln_nonexistent_command_xyz"]).run(out.clone(), err.clone()).await;
    match result.unwrap_err() {
        ExecError::SpawnFailed { command, source } => {
            assert_eq!(command, "kiln_nonexistent_command_xyz");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SpawnFailed, got: {other:?}"),
    }
    assert_eq!(out.chunk_count(), 0);
    assert_eq!(err.chunk_count(), 0);
}

#[tokio::test]
async fn spawn_failed_is_not_an_exit_failure() {
    let (out, err) = captures();
    let err = Executor::new(["/nonexistent/bin/tool"]).run(out, err).await.unwrap_err();
    assert!(!err.is_exit_failure());
    assert_eq!(err.exit_code(), None);
    assert_eq!(err.command(), Some("/nonexistent/bin/tool"));
}

#[tokio::test]
async fn missing_working_directory_fails_to_spawn() {
    let (out, err) = captures();
    let result = Executor::new(["true"]).cwd("/nonexistent/kiln/dir").run(out, err).await;
    assert!(matches!(result, Err(ExecError::SpawnFailed { .. })));
}

#[tokio::test]
async fn empty_argv_is_rejected() {
    let (out, err) = captures();
    let result = Executor::new(Vec::<String>::new()).run(out, err).await;
    assert!(matches!(result, Err(ExecError::EmptyCommand)));
}

#[tokio::test]
async fn unresolvable_user_never_starts() {
    let (out, err) = captures();
    let result = Executor::new(["sh", "-c", "echo ran"])
        .user("ghost")
        .resolver(|spec: &str| -> Result<Identity, IdentityError> {
            Err(IdentityError::UnknownUser { name: spec.to_string() })
        })
        .run(out.clone(), err.clone())
        .await;

    match result.unwrap_err() {
        ExecError::ResolveUser { user, source } => {
            assert_eq!(user, "ghost");
            assert_eq!(source, IdentityError::UnknownUser { name: "ghost".into() });
        }
        other => panic!("expected ResolveUser, got: {other:?}"),
    }
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn error_display() {
    let err = ExecError::CommandFailed { command: "make".into(), exit_code: 2 };
    assert_eq!(err.to_string(), "command `make` exited with 2");

    let err = ExecError::ResolveUser {
        user: "app".into(),
        source: IdentityError::UnknownUser { name: "app".into() },
    };
    assert_eq!(err.to_string(), "cmd user resolve `app`: unknown user `app`");
}
