// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for working directory, environment and the free-function entry point.

use super::{captures, sh};
use crate::exec::{exec_command, Executor};

#[tokio::test]
async fn cwd_changes_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    // Canonicalize to resolve symlinks (e.g., /tmp -> /private/tmp on macOS)
    let canonical = dir.path().canonicalize().unwrap();

    let (out, err) = captures();
    Executor::new(["pwd", "-P"]).cwd(dir.path()).run(out.clone(), err).await.unwrap();
    assert_eq!(out.contents().trim(), canonical.to_str().unwrap());
}

#[tokio::test]
async fn env_is_layered_on_inherited_environment() {
    let (out, err) = captures();
    sh("printf '%s:%s' \"$KILN_TEST_VAR\" \"${PATH:+inherited}\"")
        .env("KILN_TEST_VAR", "set")
        .run(out.clone(), err)
        .await
        .unwrap();
    assert_eq!(out.contents(), "set:inherited");
}

#[tokio::test]
async fn exec_command_inherits_by_default() {
    let (out, err) = captures();
    exec_command(["sh", "-c", "printf ok"], None, None, out.clone(), err.clone())
        .await
        .unwrap();
    assert_eq!(out.contents(), "ok");
    assert!(err.is_empty());
}

#[tokio::test]
async fn exec_command_with_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "found").unwrap();

    let (out, err) = captures();
    exec_command(["cat", "marker.txt"], Some(dir.path()), Some(""), out.clone(), err)
        .await
        .unwrap();
    assert_eq!(out.contents(), "found");
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn child_leads_its_own_process_group() {
    let (out, err) = captures();
    sh("cut -d' ' -f5 /proc/$$/stat; echo $$").run(out.clone(), err).await.unwrap();
    let contents = out.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "output: {contents:?}");
    assert_eq!(lines[0], lines[1]);
}
