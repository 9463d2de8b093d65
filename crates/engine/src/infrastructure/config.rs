//! Process configuration read from the environment.

use std::path::{Path, PathBuf};

use nrdbot_domain::{ColorTable, ShorthandTable, TableError};

use super::netrunnerdb::DEFAULT_NRDB_BASE_URL;

/// Multi-match results above this count are summarized instead of listed.
pub const DEFAULT_MAX_HITS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid table in {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },
    #[error("Built-in table is invalid: {0}")]
    Builtin(#[from] TableError),
}

/// Everything the engine reads from its environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Token expected in POST webhook bodies.
    pub post_token: String,
    /// Token expected in GET query strings.
    pub get_token: String,
    pub max_hits: usize,
    pub nrdb_base_url: String,
    /// Replaces the built-in shorthand table when set.
    pub shorthands_path: Option<PathBuf>,
    /// Replaces the built-in colour table when set.
    pub colours_path: Option<PathBuf>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let server_port = get("PORT")
            .or_else(|| get("SERVER_PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let max_hits = get("MAX_HITS")
            .and_then(|m| m.parse().ok())
            .unwrap_or(DEFAULT_MAX_HITS);

        Self {
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            post_token: get("POST_TOKEN").unwrap_or_default(),
            get_token: get("GET_TOKEN").unwrap_or_default(),
            max_hits,
            nrdb_base_url: get("NRDB_BASE_URL").unwrap_or_else(|| DEFAULT_NRDB_BASE_URL.into()),
            shorthands_path: get("SHORTHANDS_PATH").map(PathBuf::from),
            colours_path: get("COLOURS_PATH").map(PathBuf::from),
        }
    }

    pub fn load_shorthands(&self) -> Result<ShorthandTable, ConfigError> {
        match &self.shorthands_path {
            Some(path) => {
                let json = read_table(path)?;
                ShorthandTable::from_json(&json).map_err(|source| ConfigError::Table {
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(ShorthandTable::builtin()?),
        }
    }

    pub fn load_colours(&self) -> Result<ColorTable, ConfigError> {
        match &self.colours_path {
            Some(path) => {
                let json = read_table(path)?;
                ColorTable::from_json(&json).map_err(|source| ConfigError::Table {
                    path: path.clone(),
                    source,
                })
            }
            None => Ok(ColorTable::builtin()?),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn read_table(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
