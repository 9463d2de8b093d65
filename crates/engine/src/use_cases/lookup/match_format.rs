//! Multi-match message formatting.

use nrdbot_domain::{Attachment, Candidate, OutboundMessage, ResponseMessages};

/// List every candidate, unless there are more than `max_hits` of them, in
/// which case only the count is reported.
pub fn format_candidates(
    candidates: &[Candidate],
    max_hits: usize,
    messages: &ResponseMessages,
) -> OutboundMessage {
    let hits = candidates.len();

    if hits > max_hits {
        tracing::info!(hits, max_hits, "Too many matches, not listing candidates");
        return OutboundMessage::plain(format!("{}{}", hits, messages.too_many));
    }

    let list = candidates
        .iter()
        .map(|c| format!("• <{}|{}>", c.url, c.title))
        .collect::<Vec<_>>()
        .join("\n");

    OutboundMessage::with_attachment(
        format!("{}{}", hits, messages.multiple_results),
        Attachment {
            text: Some(list),
            fallback: Some("NRDB results for multiple cards".to_string()),
            ..Default::default()
        },
    )
}
