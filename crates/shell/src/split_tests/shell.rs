// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-mode splitting: quotes are kept, control operators stand alone.

use crate::split::{split_args, SplitMode};

split_tests! { SplitMode::Shell;
    empty_input: "" => [],
    simple_command: "echo hello" => ["echo", "hello"],

    // Operators
    and_chain: "echo hi && ls" => ["echo", "hi", "&&", "ls"],
    or_chain: "cmd1 || cmd2" => ["cmd1", "||", "cmd2"],
    unspaced_and: "a&&b" => ["a", "&&", "b"],
    unspaced_semicolon: "a;b" => ["a", ";", "b"],
    pipe_before_word: "a |b" => ["a", "|", "b"],
    mixed_operator_run: "a|&b" => ["a", "|&", "b"],
    leading_operator: "&& a" => ["&&", "a"],
    trailing_background: "echo a &" => ["echo", "a", "&"],
    trailing_operator_run: "a;;" => ["a", ";;"],

    // Quotes are retained
    quoted_group: "echo \"a b\"" => ["echo", "\"a b\""],
    empty_quotes: "\"\"" => ["\"\""],
    quote_inside_word_is_literal: "--opt=\"a b\"" => ["--opt=\"a", "b\""],
    quote_inside_word_before_operator: "a\"b&&c" => ["a\"b", "&&", "c"],
    escaped_quote_keeps_backslash: r#""a\"b""# => [r#""a\"b""#],
    operator_inside_quotes: "\"a && b\"" => ["\"a && b\""],

    // Operators after quotes
    operator_after_quote: "\"a\"&&b" => ["\"a\"", "&&", "b"],
    quote_after_operator: "\"a\"|\"b\"" => ["\"a\"", "|", "\"b\""],

    // Escapes
    escaped_operator: r"\&& x" => [r"\&", "&", "x"],
}
