// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for argument splitting tests.

/// Generate splitting success tests for one mode.
///
/// ```ignore
/// split_tests! { SplitMode::Plain;
///     two_words: "a b" => ["a", "b"],
/// }
/// ```
macro_rules! split_tests {
    ($mode:expr; $($name:ident: $input:expr => [$($arg:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let args = split_args($input, $mode).expect(concat!("failed to split: ", $input));
                let expected: Vec<&str> = vec![$($arg),*];
                assert_eq!(args, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate splitting error tests for one mode.
///
/// ```ignore
/// split_error_tests! { SplitMode::Plain;
///     open_quote: "\"a" => SplitError::UnterminatedQuote { .. },
/// }
/// ```
macro_rules! split_error_tests {
    ($mode:expr; $($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = split_args($input, $mode);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}
