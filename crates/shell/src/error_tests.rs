// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn unterminated_quote_names_partial_argument() {
    let error = SplitError::UnterminatedQuote { partial: "ab c".into(), span: Span::new(0, 5) };
    assert_eq!(
        error.to_string(),
        "unexpected termination: missing closing quote after argument: ab c"
    );
}

#[test]
fn missing_whitespace_display() {
    let error = SplitError::MissingWhitespace { ch: 'x', span: Span::new(3, 4) };
    let display = error.to_string();
    assert!(display.starts_with("missing whitespace after argument"));
    assert!(display.contains("'x' at position 3"));
}

#[test]
fn span_extraction() {
    let error = SplitError::NotInShell { span: Span::new(2, 3) };
    assert_eq!(error.span(), Span::new(2, 3));
}

#[test]
fn context_and_diagnostic() {
    let input = "echo \"hi\"!";
    let error = SplitError::MissingWhitespace { ch: '!', span: Span::new(9, 10) };

    let context = error.context(input, 3);
    assert!(context.contains("hi\"!"));
    assert!(context.ends_with('^'));

    let diag = error.diagnostic(input);
    assert!(diag.contains("line 1, column 10"));
    assert!(diag.contains("echo \"hi\"!"));
}
