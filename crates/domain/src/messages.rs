//! User-facing response phrases.

/// Static phrases used when no card body is returned.
///
/// `multiple_results` and `too_many` are suffixes appended to a hit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessages {
    pub invalid_token: String,
    pub no_query: String,
    pub multiple_results: String,
    pub no_results: String,
    pub too_many: String,
}

impl Default for ResponseMessages {
    fn default() -> Self {
        Self {
            invalid_token: "Invalid token detected, deploying ICE\n↳ End the run".to_string(),
            no_query: "I can't find nothing, what's next? dividing by zero?".to_string(),
            multiple_results: " cards matched your search:".to_string(),
            no_results: "You successfully access R&D but it doesn't hold what you're looking for"
                .to_string(),
            too_many: " results!? you tryna overflow my core buffers?".to_string(),
        }
    }
}
