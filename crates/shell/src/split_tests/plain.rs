// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-mode splitting: quotes are stripped, operators are ordinary text.

use crate::split::{split_args, SplitMode};

split_tests! { SplitMode::Plain;
    empty_input: "" => [],
    only_whitespace: " \t \n " => [],
    single_word: "echo" => ["echo"],
    collapses_whitespace: "a  \t b\n c" => ["a", "b", "c"],
    leading_and_trailing_whitespace: "  a b  " => ["a", "b"],
    unicode_words: "héllo wörld" => ["héllo", "wörld"],

    // Quotes
    quoted_group: "a \"b c\" d" => ["a", "b c", "d"],
    quoted_then_space: "\"a\" x" => ["a", "x"],
    quoted_then_tab: "\"a\"\t\"b\"" => ["a", "b"],
    empty_quotes: "\"\"" => [""],
    adjacent_empty_quotes: "\"\"\"\"" => ["", ""],
    adjacent_quoted_args: "\"a\"\"b c\"" => ["a", "b c"],
    quote_inside_word_is_literal: "--opt=\"a b\"" => ["--opt=\"a", "b\""],
    lone_quote_inside_word: "a\"b" => ["a\"b"],
    quoted_whitespace_kept: "\" spaced  out \"" => [" spaced  out "],

    // Escapes
    backslash_inside_word_is_literal: r"a\b" => [r"a\b"],
    leading_escape_keeps_backslash: r"\$HOME" => [r"\$HOME"],
    escaped_space_joins: r"\ a" => [" a"],
    escaped_quote_at_start: r#"\"x"# => [r#""x"#],
    escaped_quote_in_quotes: r#""a\"b""# => [r#"a"b"#],
    escaped_backslash_in_quotes: r#""a\\b""# => [r"a\\b"],
    escaped_letter_in_quotes: r#""a\nb""# => [r"a\nb"],
    trailing_backslash: r"\" => [r"\"],
    trailing_backslash_after_word: r"a \" => ["a", r"\"],

    // Operators are ordinary characters
    ampersands_are_text: "a&&b" => ["a&&b"],
    pipes_and_semicolons_are_text: "x;y|z" => ["x;y|z"],
}
