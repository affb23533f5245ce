//! Canonical form for marker strings.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").trim().to_string()
}
