//! Single-card message formatting.
//!
//! The stat line (`"Program: Icebreaker - Killer • Install: 3 • Memory: 1 •
//! Strength: 2 • Influence: 3"`) is reshaped into a bold type line carrying
//! the faction icon and influence pips, followed by a dash-joined stat line
//! with stat names swapped for icons.

use std::sync::LazyLock;

use nrdbot_domain::{Attachment, CardInfo, ColorTable, OutboundMessage};
use regex_lite::{Captures, Regex};

use super::rules::{apply_all, Replacement, RewriteRule};

/// Glyph repeated once per point of influence.
pub const INFLUENCE_PIP: char = '•';

/// Upper bound on rendered pips; the count comes from the remote page.
pub const MAX_INFLUENCE_PIPS: usize = 10;

const SEGMENT_SEPARATOR: &str = " • ";

static INFLUENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Influence: (\d+)").expect("valid regex"));

// Type token ends at the first colon or dash separator of the type segment
static TYPE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)(:| - |$)").expect("valid regex"));

/// Stat rules in application order, each rewriting its first match only.
///
/// The Deck/Influence pair must collapse before bare influence is turned into
/// pips, or an identity's deck limit would lose its influence half.
pub static STAT_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    use Replacement::{Computed, Template};
    vec![
        RewriteRule::first("memory", r"Memory: (\d+)", Template(":_${1}mu:")),
        RewriteRule::first("strength", r"Strength: (\d+|X)", Template("${1} Str")),
        RewriteRule::first("cost", r"(?:Install|Cost): (\d+|X)", Template("${1}:_credit:")),
        RewriteRule::first("rez", r"Rez: (\d+|X)", Template("${1}:_rez:")),
        RewriteRule::first("advancement", r"Adv: (\d+|X)", Template("${1} Adv")),
        RewriteRule::first("score", r"Score: (\d+|X)", Template("${1}:_agenda:")),
        RewriteRule::first("trash", r"Trash: (\d+|X)", Template("${1}:_trash:")),
        RewriteRule::first("link", r"Link: (\d+)", Template("${1}:_link:")),
        RewriteRule::first("deck-influence", r"Deck: (\d+) - Influence: (\d+)", Template("${1}/${2}")),
        RewriteRule::first("influence", r"Influence: (\d+)", Computed(influence_pips)),
    ]
});

/// Agendas and identities keep any bare influence as text.
const PIP_RULE: &str = "influence";

fn influence_pips(caps: &Captures) -> String {
    pips(caps[1].parse().unwrap_or(0))
}

fn pips(count: usize) -> String {
    std::iter::repeat(INFLUENCE_PIP)
        .take(count.min(MAX_INFLUENCE_PIPS))
        .collect()
}

/// Reshape a card's raw stat line for display.
pub fn format_stat_line(card: &CardInfo) -> String {
    let exempt = card.is_agenda_or_identity();
    let mut segments: Vec<String> = card
        .stat_line
        .split(SEGMENT_SEPARATOR)
        .map(str::to_string)
        .collect();

    // Bold before the faction icon and pips are appended
    let mut type_segment = TYPE_TOKEN_RE
        .replacen(&segments.remove(0), 1, "*${1}*${2}")
        .into_owned();
    if !card.faction.is_empty() {
        type_segment.push_str(&format!(" - :_{}:", card.faction.to_lowercase()));
    }

    // Trailing influence becomes pips on the type line
    if !exempt {
        let influence = segments
            .last()
            .and_then(|s| INFLUENCE_RE.captures(s))
            .map(|caps| caps[1].parse::<usize>().unwrap_or(0));
        if let Some(influence) = influence {
            segments.pop();
            type_segment.push_str(&pips(influence));
        }
    }

    let mut line = type_segment;
    if !segments.is_empty() {
        line.push('\n');
        line.push_str(&segments.join(" - "));
    }

    apply_all(
        &line,
        STAT_RULES
            .iter()
            .filter(|rule| !(exempt && rule.name == PIP_RULE)),
    )
}

/// Build the chat message for a single card.
pub fn format_card(card: &CardInfo, colours: &ColorTable) -> OutboundMessage {
    let mut body: Vec<String> = card.paragraphs.clone();
    if let Some(flavor) = &card.flavor {
        body.push(format!("_{}_", flavor));
    }

    let attachment = Attachment {
        pretext: Some(format_stat_line(card)).filter(|_| !card.stat_line.is_empty()),
        text: Some(body.join("\n")).filter(|t| !t.is_empty()),
        color: colours.color_for(&card.faction).map(str::to_string),
        fallback: Some(format!("NRDB results for {}", card.title)),
        mrkdwn_in: vec!["pretext".to_string(), "text".to_string()],
    };

    OutboundMessage::with_attachment(format!("<{}|*{}*>", card.url, card.title), attachment)
}
