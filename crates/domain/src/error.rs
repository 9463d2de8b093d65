//! Errors raised while loading the lookup tables.

use thiserror::Error;

/// Failure to build a [`ShorthandTable`](crate::ShorthandTable) or
/// [`ColorTable`](crate::ColorTable) from its source data.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table document is not a flat JSON object of strings.
    #[error("Invalid table data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The shorthand keys could not be compiled into a matcher.
    #[error("Invalid shorthand pattern: {0}")]
    Pattern(String),
}
