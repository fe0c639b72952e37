// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset locations inside a directive's argument string.

/// A half-open byte range `[start, end)` into the split input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// A span covering the single character `ch` found at `pos`.
    #[inline]
    pub fn at(pos: usize, ch: char) -> Self {
        Self { start: pos, end: pos + ch.len_utf8() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` when the span does not fit `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Show `context_chars` characters either side of `span` with carets below.
///
/// ```text
/// "a"x
///    ^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let anchor = floor_char_boundary(input, span.start);
    let from = input[..anchor]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(anchor);
    let to = input[anchor..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| anchor + i + c.len_utf8())
        .unwrap_or(input.len());

    let carets = span.len().max(1);
    format!("{}\n{}{}", &input[from..to], " ".repeat(anchor - from), "^".repeat(carets))
}

/// Line (1-based), column (0-based, in chars) and full line text of `span.start`.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let anchor = floor_char_boundary(source, span.start);
    let line_start = source[..anchor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[line_start..].find('\n').map(|i| line_start + i).unwrap_or(source.len());
    let line = source[..line_start].matches('\n').count() + 1;
    let column = source[line_start..anchor].chars().count();
    (line, column, &source[line_start..line_end])
}

/// The largest char boundary of `s` at or before `index`.
///
/// Spans may come from another input, so they are not trusted to land on one.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Render `message` as a compiler-style diagnostic pointing at `span`.
///
/// ```text
/// error: missing whitespace after argument
///   --> line 1, column 4
///    |
///  1 | "a"x
///    |    ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line, column, text) = locate_span(source, span);
    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line,
        column + 1,
        line,
        text,
        " ".repeat(column),
        "^".repeat(span.len().max(1))
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
