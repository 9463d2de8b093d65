//! Application state and composition.

use std::sync::Arc;

use nrdbot_domain::ResponseMessages;

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::CardSourcePort;
use crate::use_cases::{LookupCard, LookupTables};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub webhook: WebhookTokens,
    pub messages: Arc<ResponseMessages>,
}

/// Container for all use cases.
pub struct UseCases {
    pub lookup: LookupCard,
}

/// Shared secrets the chat platform sends with each webhook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTokens {
    pub post: String,
    pub get: String,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(source: Arc<dyn CardSourcePort>, tables: LookupTables, config: &EngineConfig) -> Self {
        let messages = Arc::new(tables.messages.clone());
        let lookup = LookupCard::new(source, Arc::new(tables), config.max_hits);

        Self {
            use_cases: UseCases { lookup },
            webhook: WebhookTokens {
                post: config.post_token.clone(),
                get: config.get_token.clone(),
            },
            messages,
        }
    }
}
