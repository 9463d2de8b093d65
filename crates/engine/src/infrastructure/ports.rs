//! Port traits for infrastructure boundaries.
//!
//! The card database is the only external dependency of the lookup pipeline,
//! so it is the only port. Swapping the remote source (or scripting it in
//! tests) means implementing [`CardSourcePort`].

use async_trait::async_trait;

// =============================================================================
// Error Types
// =============================================================================

/// Transport-level failure talking to the card database.
///
/// The pipeline does not distinguish between these; all of them surface as a
/// transport failure to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

// =============================================================================
// Remote Source Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardSourcePort: Send + Sync {
    /// Run a search for an already-normalized query and return the raw page body.
    async fn search(&self, query: &str) -> Result<String, FetchError>;

    /// Fetch a card's detail page by the link found in a candidate list.
    async fn fetch_detail(&self, url: &str) -> Result<String, FetchError>;
}
