//! Classified search results and the card fields extracted from them.

/// Fields of a single card's detail panel, already cleaned of markup noise.
///
/// The stat line is kept raw. Its type segment is read through
/// [`CardInfo::type_line`], and the stat tokens are produced by the formatter's
/// ordered rewrite rules rather than stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardInfo {
    pub title: String,
    /// Detail page link for the card.
    pub url: String,
    /// First word of the footer line (`"Shaper"`, `"Haas-Bioroid"`).
    pub faction: String,
    /// Raw stat line, segments separated by `" • "`.
    pub stat_line: String,
    /// Card text paragraphs in document order; never contains empty entries.
    pub paragraphs: Vec<String>,
    pub flavor: Option<String>,
    /// Illustrator / set line the faction is read from.
    pub footer: String,
}

impl CardInfo {
    /// The type segment of the stat line (`"Program: Icebreaker - Killer"`).
    pub fn type_line(&self) -> &str {
        self.stat_line
            .split(" • ")
            .next()
            .unwrap_or_default()
    }

    /// Agendas and identities show influence differently from other cards.
    pub fn is_agenda_or_identity(&self) -> bool {
        let type_line = self.type_line();
        type_line.contains("Agenda") || type_line.contains("Identity")
    }
}

/// One entry of a multi-card search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Cleaned display text of the title cell.
    pub title: String,
    /// Detail page link; may be relative to the card database root.
    pub url: String,
}

/// What a fetched search page turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedResult {
    /// Exactly one detail panel.
    SingleCard(CardInfo),
    /// A list of candidate titles, in document order.
    MultipleCandidates(Vec<Candidate>),
    NoMatch,
}

impl ClassifiedResult {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SingleCard(_) => "single",
            Self::MultipleCandidates(_) => "multiple",
            Self::NoMatch => "none",
        }
    }
}
