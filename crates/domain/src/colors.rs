//! Faction colour table used for attachment side bars.

use std::collections::HashMap;

use crate::error::TableError;

const BUILTIN_COLOURS: &str = include_str!("../data/colours.json");

/// Immutable faction name -> display colour mapping.
///
/// Faction names are matched verbatim, as they appear on the card page
/// (`"Haas-Bioroid"`, `"NBN"`).
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colours: HashMap<String, String>,
}

impl ColorTable {
    pub fn new<I, K, V>(colours: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            colours: colours
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(raw))
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_json(BUILTIN_COLOURS)
    }

    /// Colour for `faction`, if one is configured.
    pub fn color_for(&self, faction: &str) -> Option<&str> {
        self.colours.get(faction).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
