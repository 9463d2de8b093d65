//! Ordered regex rewrite rules.
//!
//! Both the page markup pass and the stat line pass are plain lists of
//! [`RewriteRule`]s applied in sequence. Order matters: each rule sees the
//! output of every rule before it.

use std::borrow::Cow;

use regex_lite::{Captures, Regex};

/// What a matched span is replaced with.
pub enum Replacement {
    /// `$1`-style template expanded against the match.
    Template(&'static str),
    /// Replacement computed from the captures.
    Computed(fn(&Captures) -> String),
}

pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: Replacement,
    /// Maximum replacements per application; 0 replaces every match.
    limit: usize,
}

impl RewriteRule {
    /// Rule that rewrites every match.
    ///
    /// Panics on an invalid pattern; rules are compile-time constants.
    pub fn all(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement,
            limit: 0,
        }
    }

    /// Rule that rewrites only the first match.
    pub fn first(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        Self {
            limit: 1,
            ..Self::all(name, pattern, replacement)
        }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replacen(text, self.limit, template),
            Replacement::Computed(f) => self.pattern.replacen(text, self.limit, f),
        }
    }
}

/// Run `text` through `rules` in order.
pub fn apply_all<'r>(text: &str, rules: impl IntoIterator<Item = &'r RewriteRule>) -> String {
    rules
        .into_iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}
