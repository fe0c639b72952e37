// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exec-form detection.

/// Parse `raw` as a JSON array whose elements are all strings.
///
/// Anything else (objects, `null`, mixed arrays, malformed JSON) is `None`.
pub fn parse_json_array(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).ok()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
