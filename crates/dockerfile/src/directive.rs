// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ENTRYPOINT` and `CMD` directives.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::form::{resolve_cmd, resolve_entrypoint};

/// Where resolved directives go: the stage currently being built.
///
/// Stage bookkeeping lives with the caller; this crate only hands over
/// finished directives.
pub trait BuildStage {
    fn add_directive(&mut self, directive: Directive);
}

impl BuildStage for Vec<Directive> {
    fn add_directive(&mut self, directive: Directive) {
        self.push(directive);
    }
}

/// `ENTRYPOINT ["exe", "arg"...]` or `ENTRYPOINT command text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrypointDirective {
    /// Raw argument text after the keyword.
    pub args: String,
    /// Resolved argument vector.
    pub entrypoint: Vec<String>,
}

impl EntrypointDirective {
    pub fn new(args: impl Into<String>) -> Result<Self, FormError> {
        let args = args.into();
        let entrypoint = resolve_entrypoint(&args)?;
        Ok(Self { args, entrypoint })
    }

    /// Add this directive to `stage`.
    pub fn update(self, stage: &mut impl BuildStage) {
        stage.add_directive(Directive::Entrypoint(self));
    }
}

/// `CMD ["exe", "arg"...]` or `CMD command text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmdDirective {
    pub args: String,
    pub cmd: Vec<String>,
}

impl CmdDirective {
    pub fn new(args: impl Into<String>) -> Result<Self, FormError> {
        let args = args.into();
        let cmd = resolve_cmd(&args)?;
        Ok(Self { args, cmd })
    }

    pub fn update(self, stage: &mut impl BuildStage) {
        stage.add_directive(Directive::Cmd(self));
    }
}

/// A resolved directive, tagged by keyword when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "UPPERCASE")]
pub enum Directive {
    Entrypoint(EntrypointDirective),
    Cmd(CmdDirective),
}

impl Directive {
    /// The argument vector this directive contributes to the image config.
    pub fn argv(&self) -> &[String] {
        match self {
            Directive::Entrypoint(d) => &d.entrypoint,
            Directive::Cmd(d) => &d.cmd,
        }
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
