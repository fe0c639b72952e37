// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-state transition tests against the private splitter.

use crate::error::SplitError;
use crate::split::{SplitMode, Splitter, State};

fn feed(splitter: &mut Splitter, mut state: State, input: &str) -> State {
    for (pos, ch) in input.char_indices() {
        state = splitter.next_char(state, pos, ch).unwrap();
    }
    state
}

#[yare::parameterized(
    space_stays_on_whitespace = { SplitMode::Plain, " ", State::Space },
    space_to_word = { SplitMode::Plain, "a", State::Word },
    space_to_quoted = { SplitMode::Plain, "\"", State::Quoted },
    space_escape_to_word = { SplitMode::Plain, "\\", State::Word },
    plain_operator_is_word = { SplitMode::Plain, "&", State::Word },
    shell_operator = { SplitMode::Shell, "&", State::ShellOperator },
    operator_run = { SplitMode::Shell, "&&|", State::ShellOperator },
    operator_then_word = { SplitMode::Shell, "&x", State::Word },
    operator_then_space = { SplitMode::Shell, "; ", State::Space },
    closing_quote = { SplitMode::Plain, "\"a\"", State::AfterQuote },
    word_then_space = { SplitMode::Plain, "ab ", State::Space },
    word_keeps_quote = { SplitMode::Plain, "a\"", State::Word },
    shell_word_keeps_quote = { SplitMode::Shell, "a\"", State::Word },
)]
fn transition(mode: SplitMode, input: &str, expected: State) {
    let mut splitter = Splitter::new(mode);
    assert_eq!(feed(&mut splitter, State::Space, input), expected);
}

#[test]
fn operator_state_rejected_in_plain_mode() {
    let mut splitter = Splitter::new(SplitMode::Plain);
    let err = splitter.next_char(State::ShellOperator, 4, 'x').unwrap_err();
    assert!(matches!(err, SplitError::NotInShell { .. }));
    assert!(err.to_string().starts_with("not in a shell"));
}

#[test]
fn escape_flag_lasts_one_character() {
    let mut splitter = Splitter::new(SplitMode::Plain);
    let state = feed(&mut splitter, State::Space, "\\a");
    assert_eq!(state, State::Word);
    assert!(!splitter.escaped);
    assert_eq!(splitter.current, "\\a");
}

#[test]
fn quote_flushes_empty_argument() {
    let mut splitter = Splitter::new(SplitMode::Plain);
    let state = feed(&mut splitter, State::Space, "\"\"");
    assert_eq!(state, State::AfterQuote);
    assert_eq!(splitter.args, vec![String::new()]);
}

#[test]
fn clean_end_does_not_add_empty_argument() {
    let mut splitter = Splitter::new(SplitMode::Plain);
    let state = feed(&mut splitter, State::Space, "a ");
    assert_eq!(splitter.end_of_input(state, 2).unwrap(), vec!["a"]);
}

#[test]
fn operator_flushed_at_end_of_input() {
    let mut splitter = Splitter::new(SplitMode::Shell);
    let state = feed(&mut splitter, State::Space, "a &&");
    assert_eq!(state, State::ShellOperator);
    assert_eq!(splitter.end_of_input(state, 4).unwrap(), vec!["a", "&&"]);
}
