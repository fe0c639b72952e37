// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for running as another user.
//!
//! The resolver maps every spec onto the current ids so these run unprivileged.

use serial_test::serial;

use super::{captures, sh};
use crate::exec::{Identity, IdentityError};

fn current_ids(_: &str) -> Result<Identity, IdentityError> {
    Ok(Identity {
        uid: nix::unistd::getuid().as_raw(),
        gid: nix::unistd::getgid().as_raw(),
    })
}

#[tokio::test]
#[serial]
async fn user_overrides_home() {
    std::env::remove_var("KILN_HOME_ROOT");
    let (out, err) = captures();
    sh("printf %s \"$HOME\"")
        .user("builder:builder")
        .resolver(current_ids)
        .run(out.clone(), err)
        .await
        .unwrap();
    assert_eq!(out.contents(), "/home/builder");
}

#[tokio::test]
#[serial]
async fn user_home_wins_over_explicit_env() {
    std::env::remove_var("KILN_HOME_ROOT");
    let (out, err) = captures();
    sh("printf %s \"$HOME\"")
        .env("HOME", "/elsewhere")
        .user("app")
        .resolver(current_ids)
        .run(out.clone(), err)
        .await
        .unwrap();
    assert_eq!(out.contents(), "/home/app");
}

#[tokio::test]
#[serial]
async fn user_runs_with_resolved_ids() {
    let (out, err) = captures();
    sh("printf '%s:%s' \"$(id -u)\" \"$(id -g)\"")
        .user("builder")
        .resolver(current_ids)
        .run(out.clone(), err)
        .await
        .unwrap();
    let expected = format!(
        "{}:{}",
        nix::unistd::getuid().as_raw(),
        nix::unistd::getgid().as_raw()
    );
    assert_eq!(out.contents(), expected);
}

#[tokio::test]
#[serial]
async fn no_user_keeps_inherited_home() {
    let (out, err) = captures();
    sh("printf %s \"$HOME\"").env("HOME", "/inherited").run(out.clone(), err).await.unwrap();
    assert_eq!(out.contents(), "/inherited");
}
