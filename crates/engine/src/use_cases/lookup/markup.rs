//! Page markup substitution.
//!
//! Rewrites the card database's inline HTML (icon spans, `<strong>`,
//! `<sup>`) into chat markup on the raw page body, before it is parsed, so
//! element text read later already carries the final display tokens.

use std::sync::LazyLock;

use regex_lite::Captures;

use super::rules::{apply_all, Replacement, RewriteRule};

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Markup rules in application order.
pub static MARKUP_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    use Replacement::{Computed, Template};
    vec![
        RewriteRule::all("click", r#"<span class="icon icon-click"></span>"#, Template(":_click:")),
        RewriteRule::all("credit", r#"<span class="icon icon-credit"></span>"#, Template(":_credit:")),
        RewriteRule::all("trash", r#"<span class="icon icon-trash"></span>"#, Template(":_trash:")),
        RewriteRule::all("link", r#"<span class="icon icon-link"></span>"#, Template(":_link:")),
        // Multi-unit memory forms must run before the bare mu icon
        RewriteRule::all(
            "memory-prefixed",
            r#"([1-3])<span class="icon icon-mu"></span>"#,
            Template(":_${1}mu:"),
        ),
        RewriteRule::all(
            "memory-units",
            r#"<span class="icon icon-([1-3])mu"></span>"#,
            Template(":_${1}mu:"),
        ),
        RewriteRule::all("memory", r#"<span class="icon icon-mu"></span>"#, Template(":_mu:")),
        RewriteRule::all(
            "recurring-credit",
            r#"<span class="icon icon-recurring-credit"></span>"#,
            Template(":_recurringcredit:"),
        ),
        RewriteRule::all(
            "subroutine",
            r#"<span class="icon icon-subroutine"></span>"#,
            Template(":_subroutine:"),
        ),
        RewriteRule::all("strong", r"</?strong>", Template("*")),
        RewriteRule::all("superscript", r"<sup>(\d+|X)</sup>", Computed(superscript)),
    ]
});

fn superscript(caps: &Captures) -> String {
    caps[1]
        .chars()
        .map(|c| match c {
            'X' => 'ˣ',
            d => d
                .to_digit(10)
                .map(|n| SUPERSCRIPT_DIGITS[n as usize])
                .unwrap_or(d),
        })
        .collect()
}

/// Apply every markup rule to a raw page body.
pub fn substitute(body: &str) -> String {
    apply_all(body, MARKUP_RULES.iter())
}
