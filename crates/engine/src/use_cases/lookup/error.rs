//! Lookup errors.

use crate::infrastructure::ports::FetchError;

/// The only failure a lookup reports; every other outcome is a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Card database unavailable: {0}")]
    Transport(#[from] FetchError),
}
