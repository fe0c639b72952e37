// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exec form vs. shell form.
//!
//! ```text
//! ENTRYPOINT ["/usr/bin/app", "--serve"]   # exec form, run directly
//! ENTRYPOINT /usr/bin/app --serve && wait  # shell form, run via /bin/sh -c
//! ```

use kiln_shell::{split_args, SplitMode};
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::json::parse_json_array;

/// Interpreter that shell-form commands are handed to.
pub const SHELL: &str = "/bin/sh";
/// Flag telling [`SHELL`] to run its next argument as a script.
pub const SHELL_FLAG: &str = "-c";

/// The two ways a directive can spell its command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandForm {
    /// A JSON array, used as the argument vector unchanged.
    Exec(Vec<String>),
    /// Free text, normalised to single-space separated tokens.
    Shell(String),
}

impl CommandForm {
    /// Decide the form of `raw`.
    ///
    /// Shell-form text is split with quotes and operators kept, then re-joined,
    /// so the script the shell sees differs from `raw` only in whitespace
    /// between tokens.
    pub fn resolve(raw: &str) -> Result<Self, FormError> {
        if let Some(argv) = parse_json_array(raw) {
            tracing::debug!(form = "exec", argc = argv.len(), "resolved command form");
            return Ok(CommandForm::Exec(argv));
        }
        let tokens = split_args(raw, SplitMode::Shell)?;
        tracing::debug!(form = "shell", tokens = tokens.len(), "resolved command form");
        Ok(CommandForm::Shell(tokens.join(" ")))
    }

    pub fn is_exec(&self) -> bool {
        matches!(self, CommandForm::Exec(_))
    }

    /// The argument vector to execute.
    pub fn argv(&self) -> Vec<String> {
        self.clone().into_argv()
    }

    pub fn into_argv(self) -> Vec<String> {
        match self {
            CommandForm::Exec(argv) => argv,
            CommandForm::Shell(script) => vec![SHELL.to_string(), SHELL_FLAG.to_string(), script],
        }
    }
}

/// Argument vector for an `ENTRYPOINT` argument string.
pub fn resolve_entrypoint(raw: &str) -> Result<Vec<String>, FormError> {
    CommandForm::resolve(raw).map(CommandForm::into_argv)
}

/// Argument vector for a `CMD` argument string; same rules as `ENTRYPOINT`.
pub fn resolve_cmd(raw: &str) -> Result<Vec<String>, FormError> {
    CommandForm::resolve(raw).map(CommandForm::into_argv)
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
