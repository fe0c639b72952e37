// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting failures in both modes.

use crate::error::SplitError;
use crate::span::Span;
use crate::split::{split_args, SplitMode};

split_error_tests! { SplitMode::Plain;
    plain_open_quote: "\"open" => SplitError::UnterminatedQuote { .. },
    plain_escaped_quote_leaves_argument_open: r#""a\"b"# => SplitError::UnterminatedQuote { .. },
    plain_escaped_closing_quote: r#"ok "a\""# => SplitError::UnterminatedQuote { .. },
    plain_text_after_quote: "\"a\"x" => SplitError::MissingWhitespace { ch: 'x', .. },
    plain_operator_after_quote: "\"a\"|" => SplitError::MissingWhitespace { ch: '|', .. },
}

split_error_tests! { SplitMode::Shell;
    shell_open_quote: "echo \"a && b" => SplitError::UnterminatedQuote { .. },
    shell_text_after_quote: "\"a\"b" => SplitError::MissingWhitespace { ch: 'b', .. },
}

#[test]
fn unterminated_quote_reports_partial_argument() {
    let err = split_args(r#"x "a\"b"#, SplitMode::Plain).unwrap_err();
    assert_eq!(
        err,
        SplitError::UnterminatedQuote { partial: "a\"b".into(), span: Span::new(2, 7) }
    );
    assert!(err.to_string().contains("missing closing quote after argument: a\"b"));
}

#[test]
fn unterminated_quote_keeps_quotes_in_shell_mode() {
    let err = split_args("echo \"a b", SplitMode::Shell).unwrap_err();
    match err {
        SplitError::UnterminatedQuote { partial, span } => {
            assert_eq!(partial, "\"a b");
            assert_eq!(span, Span::new(5, 9));
        }
        other => panic!("expected UnterminatedQuote, got: {other:?}"),
    }
}

#[test]
fn missing_whitespace_points_at_character() {
    let input = "run \"a\"x";
    let err = split_args(input, SplitMode::Plain).unwrap_err();
    assert_eq!(err.span(), Span::new(7, 8));
    assert!(err.diagnostic(input).contains("line 1, column 8"));
}
