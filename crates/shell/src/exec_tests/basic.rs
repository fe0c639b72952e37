// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for output streaming and exit codes.

use super::{captures, sh};
use crate::exec::{ExecError, Executor};

// ---------------------------------------------------------------------------
// Streaming
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stdout_reaches_sink() {
    let (out, err) = captures();
    sh("printf hello").run(out.clone(), err.clone()).await.unwrap();
    assert_eq!(out.contents(), "hello");
    assert!(err.is_empty());
}

#[tokio::test]
async fn stderr_reaches_its_own_sink() {
    let (out, err) = captures();
    sh("echo warn >&2").run(out.clone(), err.clone()).await.unwrap();
    assert!(out.is_empty());
    assert_eq!(err.contents(), "warn\n");
}

#[tokio::test]
async fn small_buffer_yields_many_chunks() {
    let (out, err) = captures();
    sh("head -c 300000 /dev/zero | tr '\\0' a")
        .buffer_size(4096)
        .run(out.clone(), err.clone())
        .await
        .unwrap();
    let contents = out.contents();
    assert_eq!(contents.len(), 300_000);
    assert!(contents.bytes().all(|b| b == b'a'));
    assert!(out.chunk_count() > 1);
}

#[tokio::test]
async fn both_pipes_drain_concurrently() {
    // Fills stderr well past a pipe buffer before touching stdout.
    let script = "head -c 400000 /dev/zero | tr '\\0' e >&2; head -c 400000 /dev/zero | tr '\\0' o";
    let (out, err) = captures();
    sh(script).run(out.clone(), err.clone()).await.unwrap();
    assert_eq!(out.contents().len(), 400_000);
    assert_eq!(err.contents().len(), 400_000);
}

#[tokio::test]
async fn character_split_across_writes_arrives_intact() {
    let (out, err) = captures();
    sh("printf '\\303'; sleep 0.2; printf '\\251'").run(out.clone(), err).await.unwrap();
    assert_eq!(out.contents(), "\u{e9}");
}

#[tokio::test]
async fn stdin_is_closed() {
    let (out, err) = captures();
    Executor::new(["cat"]).run(out.clone(), err.clone()).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn closure_sinks() {
    let (tx, rx) = std::sync::mpsc::channel::<String>();
    sh("printf 'one two'")
        .run(move |chunk: &str| tx.send(chunk.to_string()).unwrap(), |_: &str| {})
        .await
        .unwrap();
    let received: String = rx.iter().collect();
    assert_eq!(received, "one two");
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[yare::parameterized(
    true_cmd = { "true", None },
    false_cmd = { "false", Some(1) },
    exit_seven = { "exit 7", Some(7) },
)]
fn exit_code(script: &str, expected: Option<i32>) {
    tokio::runtime::Runtime::new().unwrap().block_on(async {
        let (out, err) = captures();
        let result = sh(script).run(out, err).await;
        assert_eq!(result.err().and_then(|e| e.exit_code()), expected);
    });
}

#[tokio::test]
async fn non_zero_exit_is_reported_on_stderr() {
    let (out, err) = captures();
    let result = sh("exit 7").run(out.clone(), err.clone()).await;
    match result.unwrap_err() {
        ExecError::CommandFailed { command, exit_code } => {
            assert_eq!(command, "sh");
            assert_eq!(exit_code, 7);
        }
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
    assert_eq!(err.contents(), "Command exited with 7\n");
    assert!(out.is_empty());
}

#[tokio::test]
async fn exit_line_follows_child_output() {
    let (out, err) = captures();
    let result = sh("echo oops >&2; exit 3").run(out, err.clone()).await;
    assert!(result.unwrap_err().is_exit_failure());
    assert_eq!(err.contents(), "oops\nCommand exited with 3\n");
}

#[tokio::test]
async fn killed_by_signal_reports_minus_one() {
    let (out, err) = captures();
    let result = sh("kill -9 $$").run(out, err.clone()).await;
    assert_eq!(result.unwrap_err().exit_code(), Some(-1));
    assert_eq!(err.contents(), "Command exited with -1\n");
}
