//! Card lookup use case.
//!
//! Normalize -> search -> substitute markup -> classify -> format, with one
//! optional re-fetch when a forceful query resolves a candidate list to a
//! single card.

mod card_format;
mod classify;
mod disambiguate;
mod error;
mod markup;
mod match_format;
mod rules;
mod sanitize;

use std::sync::Arc;

use nrdbot_domain::{
    Candidate, ClassifiedResult, ColorTable, NormalizedQuery, OutboundMessage, ResponseMessages,
    ShorthandTable,
};
use tracing::Instrument;

use crate::infrastructure::correlation::CorrelationId;
use crate::infrastructure::ports::CardSourcePort;

pub use card_format::{format_card, format_stat_line, INFLUENCE_PIP, STAT_RULES};
pub use classify::{classify, classify_page};
pub use disambiguate::first_prefix_match;
pub use error::LookupError;
pub use markup::{substitute, MARKUP_RULES};
pub use match_format::format_candidates;
pub use rules::{Replacement, RewriteRule};
pub use sanitize::clean;

/// Read-only data every lookup consults. Loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub shorthands: ShorthandTable,
    pub colours: ColorTable,
    pub messages: ResponseMessages,
}

/// Look up a card by free-text query.
///
/// Orchestrates: query normalization, remote search, classification, forceful
/// disambiguation and message formatting.
pub struct LookupCard {
    source: Arc<dyn CardSourcePort>,
    tables: Arc<LookupTables>,
    max_hits: usize,
}

impl LookupCard {
    pub fn new(source: Arc<dyn CardSourcePort>, tables: Arc<LookupTables>, max_hits: usize) -> Self {
        Self {
            source,
            tables,
            max_hits,
        }
    }

    /// Execute the lookup for a raw query (trigger word already removed).
    ///
    /// # Returns
    /// * `Ok(OutboundMessage)` - a card, a candidate list, or a static message
    /// * `Err(LookupError)` - the card database could not be reached
    pub async fn execute(&self, raw_query: &str) -> Result<OutboundMessage, LookupError> {
        let correlation_id = CorrelationId::new();
        let span = tracing::info_span!("lookup", correlation_id = %correlation_id.short());
        self.run(raw_query).instrument(span).await
    }

    async fn run(&self, raw_query: &str) -> Result<OutboundMessage, LookupError> {
        let query = NormalizedQuery::parse(raw_query, &self.tables.shorthands);
        tracing::debug!(query = %query.text, forceful = query.forceful, "Normalized query");

        let page = self.source.search(&query.text).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Card search failed");
        })?;

        let classified = classify_page(&page);
        tracing::debug!(result = classified.kind(), "Classified search page");

        match classified {
            ClassifiedResult::SingleCard(card) => Ok(format_card(&card, &self.tables.colours)),
            ClassifiedResult::MultipleCandidates(candidates) if query.forceful => {
                match first_prefix_match(&candidates, &query.text) {
                    Some(candidate) => self.resolve_candidate(candidate).await,
                    None => {
                        tracing::debug!(
                            candidates = candidates.len(),
                            "No exact-prefix candidate, listing matches"
                        );
                        Ok(self.list(&candidates))
                    }
                }
            }
            ClassifiedResult::MultipleCandidates(candidates) => Ok(self.list(&candidates)),
            ClassifiedResult::NoMatch => Ok(self.no_results()),
        }
    }

    /// Re-fetch a picked candidate's detail page. Never issues more than one request.
    async fn resolve_candidate(&self, candidate: &Candidate) -> Result<OutboundMessage, LookupError> {
        tracing::info!(title = %candidate.title, url = %candidate.url, "Forceful match, fetching detail page");

        let page = self
            .source
            .fetch_detail(&candidate.url)
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, "Detail fetch failed");
            })?;

        match classify_page(&page) {
            ClassifiedResult::SingleCard(card) => Ok(format_card(&card, &self.tables.colours)),
            other => {
                tracing::warn!(result = other.kind(), "Detail page did not hold a single card");
                Ok(self.no_results())
            }
        }
    }

    fn list(&self, candidates: &[Candidate]) -> OutboundMessage {
        format_candidates(candidates, self.max_hits, &self.tables.messages)
    }

    fn no_results(&self) -> OutboundMessage {
        OutboundMessage::plain(self.tables.messages.no_results.clone())
    }
}
