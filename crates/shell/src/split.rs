// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace splitting of directive arguments.
//!
//! A small state machine walks the input one character at a time. Double
//! quotes group words, a leading backslash escapes the next character, and in
//! [`SplitMode::Shell`] the control operators `&`, `|` and `;` become
//! standalone tokens while quotes are kept verbatim so the result can be
//! handed to a real shell.

use std::mem;

use crate::error::SplitError;
use crate::span::Span;

/// How quotes and control operators are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Quotes are stripped; `&`, `|` and `;` are ordinary characters.
    #[default]
    Plain,
    /// Quotes are kept and runs of `&`, `|`, `;` are split into their own tokens.
    Shell,
}

impl SplitMode {
    #[inline]
    fn is_shell(self) -> bool {
        self == SplitMode::Shell
    }
}

/// Split `input` into arguments.
///
/// Quotes only group when they start an argument; inside a bare word a `"` is
/// an ordinary character. Quoted empty strings survive as empty arguments. An
/// argument left open inside quotes at end of input is an error, as is a
/// closing quote followed directly by anything other than whitespace (or an
/// operator in shell mode).
pub fn split_args(input: &str, mode: SplitMode) -> Result<Vec<String>, SplitError> {
    let mut splitter = Splitter::new(mode);
    let mut state = State::Space;
    for (pos, ch) in input.char_indices() {
        state = splitter.next_char(state, pos, ch)?;
    }
    splitter.end_of_input(state, input.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between arguments.
    Space,
    /// Inside an unquoted argument.
    Word,
    /// Inside `"…"`.
    Quoted,
    /// Directly after a closing quote.
    AfterQuote,
    /// Inside a run of `&`, `|`, `;`.
    ShellOperator,
}

/// Mutable context shared by every state.
struct Splitter {
    mode: SplitMode,
    args: Vec<String>,
    current: String,
    escaped: bool,
    /// Byte offset where the open argument began.
    start: usize,
}

impl Splitter {
    fn new(mode: SplitMode) -> Self {
        Self { mode, args: Vec::new(), current: String::new(), escaped: false, start: 0 }
    }

    fn next_char(&mut self, state: State, pos: usize, ch: char) -> Result<State, SplitError> {
        match state {
            State::Space => Ok(self.space(pos, ch)),
            State::Word => Ok(self.word(pos, ch)),
            State::Quoted => Ok(self.quoted(ch)),
            State::AfterQuote => self.after_quote(pos, ch),
            State::ShellOperator => self.shell_operator(pos, ch),
        }
    }

    fn end_of_input(mut self, state: State, len: usize) -> Result<Vec<String>, SplitError> {
        match state {
            State::Space | State::AfterQuote => {}
            State::Word => {
                // A dangling escape keeps its backslash.
                if self.escaped {
                    self.current.push('\\');
                }
                self.flush();
            }
            State::ShellOperator => self.flush(),
            State::Quoted => {
                return Err(SplitError::UnterminatedQuote {
                    partial: self.current,
                    span: Span::new(self.start, len),
                })
            }
        }
        Ok(self.args)
    }

    fn space(&mut self, pos: usize, ch: char) -> State {
        if ch.is_whitespace() {
            return State::Space;
        }
        self.start = pos;
        match ch {
            '"' => self.open_quote(),
            '\\' => {
                self.escaped = true;
                State::Word
            }
            _ if self.is_operator(ch) => self.begin_operator(ch),
            _ => {
                self.current.push(ch);
                State::Word
            }
        }
    }

    fn word(&mut self, pos: usize, ch: char) -> State {
        if self.escaped {
            self.escaped = false;
            if !ch.is_whitespace() && ch != '"' {
                self.current.push('\\');
            }
            self.current.push(ch);
            return State::Word;
        }
        if ch.is_whitespace() {
            self.flush();
            return State::Space;
        }
        if self.is_operator(ch) {
            if !self.current.is_empty() {
                self.flush();
            }
            self.start = pos;
            return self.begin_operator(ch);
        }
        self.current.push(ch);
        State::Word
    }

    fn quoted(&mut self, ch: char) -> State {
        if self.escaped {
            self.escaped = false;
            if ch != '"' || self.mode.is_shell() {
                self.current.push('\\');
            }
            self.current.push(ch);
            return State::Quoted;
        }
        match ch {
            '\\' => self.escaped = true,
            '"' => {
                if self.mode.is_shell() {
                    self.current.push('"');
                }
                self.flush();
                return State::AfterQuote;
            }
            _ => self.current.push(ch),
        }
        State::Quoted
    }

    fn after_quote(&mut self, pos: usize, ch: char) -> Result<State, SplitError> {
        if ch.is_whitespace() {
            return Ok(State::Space);
        }
        self.start = pos;
        if self.is_operator(ch) {
            return Ok(self.begin_operator(ch));
        }
        if ch == '"' {
            return Ok(self.open_quote());
        }
        Err(SplitError::MissingWhitespace { ch, span: Span::at(pos, ch) })
    }

    fn shell_operator(&mut self, pos: usize, ch: char) -> Result<State, SplitError> {
        if !self.mode.is_shell() {
            return Err(SplitError::NotInShell { span: Span::at(pos, ch) });
        }
        if self.is_operator(ch) {
            self.current.push(ch);
            return Ok(State::ShellOperator);
        }
        self.flush();
        Ok(self.space(pos, ch))
    }

    fn open_quote(&mut self) -> State {
        if self.mode.is_shell() {
            self.current.push('"');
        }
        State::Quoted
    }

    fn begin_operator(&mut self, ch: char) -> State {
        self.current.push(ch);
        State::ShellOperator
    }

    fn is_operator(&self, ch: char) -> bool {
        self.mode.is_shell() && matches!(ch, '&' | '|' | ';')
    }

    fn flush(&mut self) {
        self.args.push(mem::take(&mut self.current));
    }
}

#[cfg(test)]
#[path = "split_tests/mod.rs"]
mod tests;
