//! Card-name shorthand table.
//!
//! Maps common abbreviations (`"sg"`) to the full card name they stand for
//! (`"sure gamble"`). Built once at startup and shared read-only.

use std::collections::HashMap;

use regex_lite::{Captures, Regex};

use crate::error::TableError;

const BUILTIN_SHORTHANDS: &str = include_str!("../data/shorthands.json");

/// Immutable abbreviation -> full name mapping with a precompiled whole-word matcher.
#[derive(Debug, Clone)]
pub struct ShorthandTable {
    entries: HashMap<String, String>,
    /// `None` when the table is empty.
    pattern: Option<Regex>,
}

impl ShorthandTable {
    /// Build a table from `(abbreviation, expansion)` pairs.
    ///
    /// Keys are lower-cased; expansion runs on already lower-cased queries.
    pub fn new<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        let pattern = if entries.is_empty() {
            None
        } else {
            // Longest keys first so the alternation prefers "sfss" over "sf"
            let mut keys: Vec<&str> = entries.keys().map(String::as_str).collect();
            keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            let alternation = keys
                .iter()
                .map(|k| regex_lite::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&format!(r"\b(?:{})\b", alternation))
                .map_err(|e| TableError::Pattern(e.to_string()))?;
            Some(regex)
        };

        Ok(Self { entries, pattern })
    }

    /// Parse a flat JSON object of `"abbreviation": "full name"` pairs.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::new(raw)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_json(BUILTIN_SHORTHANDS)
    }

    /// An empty table; expansion is the identity.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            pattern: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every whole-word shorthand in `text` with its expansion.
    ///
    /// Single left-to-right pass: replaced spans are never rescanned.
    pub fn expand(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &Captures| {
                self.entries
                    .get(&caps[0])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl Default for ShorthandTable {
    fn default() -> Self {
        Self::empty()
    }
}
