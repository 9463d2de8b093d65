//! Text cleanup for scraped element content.

use regex_lite::Regex;
use std::sync::LazyLock;

// regex-lite's \s is ASCII only; pages pad with non-breaking spaces too
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\\s\u{a0}]{2,}").expect("valid regex"));

/// Collapse whitespace runs (including non-breaking spaces) to one space,
/// drop tabs and trim.
pub fn clean(s: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(s, " ")
        .replace('\t', "")
        .trim()
        .to_string()
}
