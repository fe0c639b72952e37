// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution behaviour visible from outside the crate.

use similar_asserts::assert_eq;

use crate::prelude::*;

#[test]
fn runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "here\n").unwrap();

    let out = run(Executor::new(["cat", "marker.txt"]).cwd(dir.path()));
    out.passes();
    assert_eq!(out.stdout, "here\n");
}

#[test]
fn empty_user_and_dir_inherit_caller() {
    let here = std::env::current_dir().unwrap();
    let out = run(Executor::new(["pwd"]).cwd("").user(""));
    out.passes();
    assert_eq!(out.stdout.trim_end(), here.to_string_lossy());
}

#[test]
fn missing_program_fails_to_spawn_without_output() {
    let out = run(Executor::new(["kiln-definitely-not-a-program"]));
    assert!(matches!(out.result, Err(ExecError::SpawnFailed { .. })), "{:?}", out.result);
    assert_eq!(out.stdout, "");
    assert_eq!(out.stderr, "");
}

#[test]
fn drains_large_output_on_both_streams() {
    let script = "yes out | head -c 300000; yes err | head -c 300000 >&2";
    let out = run(Executor::new(["sh", "-c", script]));
    out.passes();
    assert_eq!(out.stdout.len(), 300000);
    assert_eq!(out.stderr.len(), 300000);
    assert!(out.stdout.starts_with("out\nout\n"));
    assert!(out.stderr.starts_with("err\nerr\n"));
}

#[test]
fn exec_command_streams_into_sinks() {
    init_tracing();
    let lines = CaptureSink::new();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let result = runtime.block_on(exec_command(
        ["sh", "-c", "echo one; echo two"],
        None,
        None,
        lines.clone(),
        |_: &str| {},
    ));
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(lines.contents(), "one\ntwo\n");
}

#[test]
fn killed_by_signal_reports_minus_one() {
    let out = run(Executor::new(["sh", "-c", "kill -9 $$"]));
    assert_eq!(out.exit_code(), Some(-1));
    assert!(out.stderr.ends_with("Command exited with -1\n"), "{}", out.stderr);
}
