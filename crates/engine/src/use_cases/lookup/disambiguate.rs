//! Forceful-mode candidate selection.

use nrdbot_domain::Candidate;

/// First candidate, in document order, whose title starts with `query`
/// (case-insensitive, anchored at the start of the title).
pub fn first_prefix_match<'a>(candidates: &'a [Candidate], query: &str) -> Option<&'a Candidate> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .find(|c| c.title.to_lowercase().starts_with(&query))
}
