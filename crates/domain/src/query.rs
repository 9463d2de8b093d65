//! Query normalization.

use crate::shorthand::ShorthandTable;

/// Leading character that requests forceful mode.
pub const FORCEFUL_MARKER: char = '!';

/// A query ready to be sent to the card database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Lower-cased, shorthand-expanded search text.
    pub text: String,
    /// Pick the first exact-prefix candidate instead of listing them all.
    pub forceful: bool,
}

impl NormalizedQuery {
    /// Normalize a raw query (trigger word already removed by the caller).
    ///
    /// Exactly one leading [`FORCEFUL_MARKER`] is stripped; markers anywhere
    /// else are ordinary text. Empty input passes through unchanged.
    pub fn parse(raw: &str, shorthands: &ShorthandTable) -> Self {
        let (forceful, rest) = match raw.strip_prefix(FORCEFUL_MARKER) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        Self {
            text: shorthands.expand(&rest.to_lowercase()),
            forceful,
        }
    }
}
