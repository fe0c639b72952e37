// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors raised while splitting directive arguments.

use crate::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Errors that can occur while splitting an argument string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Input ended inside a `"…"` region.
    #[error("unexpected termination: missing closing quote after argument: {partial}")]
    UnterminatedQuote {
        /// Text accumulated for the open argument.
        partial: String,
        /// From the start of the open argument to end of input.
        span: Span,
    },

    /// A closing quote was followed by something other than whitespace.
    #[error("missing whitespace after argument: unexpected '{ch}' at position {}", span.start)]
    MissingWhitespace {
        /// The offending character.
        ch: char,
        /// Source location span for the error.
        span: Span,
    },

    /// The operator state was entered while splitting in plain mode.
    #[error("not in a shell: operator at position {}", span.start)]
    NotInShell {
        /// Source location span for the error.
        span: Span,
    },
}

impl SplitError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedQuote { span, .. }
            | Self::MissingWhitespace { span, .. }
            | Self::NotInShell { span } => *span,
        }
    }

    /// A snippet of `input` around the error with a caret underneath.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }

    /// A compiler-style message with line and column.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
