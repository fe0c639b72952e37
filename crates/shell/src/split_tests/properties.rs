// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for splitting invariants.

use crate::split::{split_args, SplitMode};
use proptest::prelude::*;

/// Bare words with no quotes, escapes, operators or whitespace.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./=:-]{1,10}".prop_map(String::from)
}

/// A unit is either a bare word or a quoted phrase; the second field is the
/// argument it should produce in plain mode.
fn unit_strategy() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        word_strategy().prop_map(|w| (w.clone(), w)),
        "[a-z ]{0,8}".prop_map(|s| (format!("\"{s}\""), s)),
    ]
}

proptest! {
    /// Invariant: re-joining plain words with single spaces round-trips.
    #[test]
    fn plain_words_round_trip(words in prop::collection::vec(word_strategy(), 0..8)) {
        let args = split_args(&words.join(" "), SplitMode::Plain).unwrap();
        prop_assert_eq!(&args, &words);
        let again = split_args(&args.join(" "), SplitMode::Plain).unwrap();
        prop_assert_eq!(again, args);
    }

    /// Invariant: one argument per whitespace-separated or quoted unit.
    #[test]
    fn one_argument_per_unit(
        units in prop::collection::vec(unit_strategy(), 0..8),
        sep in "[ \t]{1,3}",
    ) {
        let input = units.iter().map(|(raw, _)| raw.as_str()).collect::<Vec<_>>().join(&sep);
        let args = split_args(&input, SplitMode::Plain).unwrap();
        let expected: Vec<String> = units.into_iter().map(|(_, arg)| arg).collect();
        prop_assert_eq!(args, expected);
    }

    /// Invariant: operators between words become their own arguments.
    #[test]
    fn shell_operators_alternate(
        words in prop::collection::vec(word_strategy(), 1..6),
        op in prop::sample::select(vec!["&&", "||", ";", "|", "&"]),
    ) {
        let args = split_args(&words.join(op), SplitMode::Shell).unwrap();
        prop_assert_eq!(args.len(), words.len() * 2 - 1);
        for (i, arg) in args.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(arg, &words[i / 2]);
            } else {
                prop_assert_eq!(arg.as_str(), op);
            }
        }
    }

    /// Invariant: arbitrary input never panics in either mode.
    #[test]
    fn arbitrary_input_does_not_panic(input in ".{0,40}", shell in any::<bool>()) {
        let mode = if shell { SplitMode::Shell } else { SplitMode::Plain };
        let _ = split_args(&input, mode);
    }
}
