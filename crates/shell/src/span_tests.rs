// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn at_covers_multibyte_char() {
    let span = Span::at(3, 'é');
    assert_eq!(span, Span::new(3, 5));
    assert_eq!(span.len(), 2);
    assert!(!span.is_empty());
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(4, 10).slice("abc"), "");
    assert_eq!(Span::new(1, 3).slice("abcdef"), "bc");
}

#[yare::parameterized(
    first_line = { "echo \"a\"x", Span::new(8, 9), 1, 8, "echo \"a\"x" },
    second_line = { "one\ntwo \"b\"c", Span::new(11, 12), 2, 7, "two \"b\"c" },
    past_end = { "abc", Span::new(9, 9), 1, 3, "abc" },
)]
fn locate(source: &str, span: Span, line: usize, column: usize, text: &str) {
    assert_eq!(locate_span(source, span), (line, column, text));
}

#[test]
fn snippet_points_at_span() {
    let snippet = context_snippet("run \"a\"x now", Span::new(7, 8), 3);
    assert_eq!(snippet, "\"a\"x no\n   ^");
}

#[test]
fn snippet_at_start_of_input() {
    let snippet = context_snippet("\"open", Span::new(0, 5), 2);
    assert_eq!(snippet, "\"op\n^^^^^");
}

#[test]
fn diagnostic_has_line_and_column() {
    let diag = diagnostic_context("ls\n\"a\"x", Span::new(6, 7), "missing whitespace after argument");
    assert!(diag.starts_with("error: missing whitespace after argument"));
    assert!(diag.contains("line 2, column 4"));
    assert!(diag.contains("  2 | \"a\"x"));
    assert!(diag.ends_with("   |    ^"));
}

#[test]
fn foreign_span_inside_multibyte_char() {
    // Offset 2 falls in the middle of 'é' (bytes 1..3).
    let snippet = context_snippet("xé y", Span::new(2, 3), 2);
    assert_eq!(snippet, "xé y\n ^");

    assert_eq!(locate_span("aé\nb", Span::new(2, 3)), (1, 1, "aé"));
    assert_eq!(locate_span("é", Span::new(1, 1)), (1, 0, "é"));
}
