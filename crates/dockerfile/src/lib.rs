// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kiln-dockerfile: command-form resolution for `ENTRYPOINT` and `CMD`.
//!
//! A directive argument is either a JSON array of strings (exec form, used
//! verbatim) or free text (shell form, split shell-aware and wrapped in
//! `/bin/sh -c`).

mod directive;
mod error;
mod form;
pub mod json;

pub use directive::{BuildStage, CmdDirective, Directive, EntrypointDirective};
pub use error::FormError;
pub use form::{resolve_cmd, resolve_entrypoint, CommandForm, SHELL, SHELL_FLAG};
pub use json::parse_json_array;
