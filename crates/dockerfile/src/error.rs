// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from resolving a directive's command form.

use kiln_shell::{Span, SplitError};
use thiserror::Error;

/// Resolution only fails when shell-form text cannot be split.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Split(#[from] SplitError),
}

impl FormError {
    pub fn span(&self) -> Span {
        match self {
            FormError::Split(e) => e.span(),
        }
    }

    pub fn diagnostic(&self, input: &str) -> String {
        match self {
            FormError::Split(e) => e.diagnostic(input),
        }
    }
}
