// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of `user[:group]` specs to numeric ids.

use std::path::PathBuf;

use nix::unistd::{Group, Uid, User};

/// Numeric credentials a child process is started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
}

/// Errors from resolving a user spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("empty user spec")]
    EmptySpec,

    #[error("unknown user `{name}`")]
    UnknownUser { name: String },

    #[error("unknown group `{name}`")]
    UnknownGroup { name: String },

    #[error("lookup of `{name}` failed: {message}")]
    Lookup { name: String, message: String },
}

/// Maps a `user[:group]` spec onto numeric ids.
///
/// Implemented for plain closures so callers can plug in their own user
/// database.
pub trait ResolveUser: Send + Sync {
    fn resolve(&self, spec: &str) -> Result<Identity, IdentityError>;
}

impl<F> ResolveUser for F
where
    F: Fn(&str) -> Result<Identity, IdentityError> + Send + Sync,
{
    fn resolve(&self, spec: &str) -> Result<Identity, IdentityError> {
        self(spec)
    }
}

/// Resolves names against the host's passwd and group databases.
///
/// Numeric ids are taken as-is. Without an explicit group the user's primary
/// group is used, falling back to the uid when the user has no passwd entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUsers;

impl ResolveUser for SystemUsers {
    fn resolve(&self, spec: &str) -> Result<Identity, IdentityError> {
        let (user, group) = match spec.split_once(':') {
            Some((user, group)) => (user, Some(group).filter(|g| !g.is_empty())),
            None => (spec, None),
        };
        if user.is_empty() {
            return Err(IdentityError::EmptySpec);
        }

        let (uid, primary_gid) = match user.parse::<u32>() {
            Ok(uid) => {
                let entry = User::from_uid(Uid::from_raw(uid)).map_err(|e| lookup(user, e))?;
                (uid, entry.map(|u| u.gid.as_raw()))
            }
            Err(_) => {
                let entry = User::from_name(user)
                    .map_err(|e| lookup(user, e))?
                    .ok_or_else(|| IdentityError::UnknownUser { name: user.to_string() })?;
                (entry.uid.as_raw(), Some(entry.gid.as_raw()))
            }
        };

        let gid = match group {
            Some(group) => resolve_group(group)?,
            None => primary_gid.unwrap_or(uid),
        };
        Ok(Identity { uid, gid })
    }
}

fn resolve_group(group: &str) -> Result<u32, IdentityError> {
    if let Ok(gid) = group.parse::<u32>() {
        return Ok(gid);
    }
    Group::from_name(group)
        .map_err(|e| lookup(group, e))?
        .map(|g| g.gid.as_raw())
        .ok_or_else(|| IdentityError::UnknownGroup { name: group.to_string() })
}

fn lookup(name: &str, errno: nix::errno::Errno) -> IdentityError {
    IdentityError::Lookup { name: name.to_string(), message: errno.desc().to_string() }
}

/// The user half of a `user[:group]` spec.
pub fn user_name(spec: &str) -> &str {
    spec.split_once(':').map_or(spec, |(user, _)| user)
}

/// `HOME` for a child running as `spec`, rooted at [`crate::env::home_root`].
pub fn home_dir(spec: &str) -> PathBuf {
    crate::env::home_root().join(user_name(spec))
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
