//! NetrunnerDB HTML search client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::infrastructure::ports::{CardSourcePort, FetchError};

/// Default card database root.
pub const DEFAULT_NRDB_BASE_URL: &str = "https://netrunnerdb.com";

const USER_AGENT: &str = concat!("nrdbot/", env!("CARGO_PKG_VERSION"));

/// Client for NetrunnerDB's public search page.
///
/// One GET per call, no retries: a failed fetch is reported straight back to
/// the pipeline. Timeouts are the transport defaults.
#[derive(Clone)]
pub struct NetrunnerDbClient {
    client: Client,
    base_url: Url,
}

impl NetrunnerDbClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        // Keep a trailing slash so relative joins append instead of replacing
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn search_url(&self, query: &str) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join("find/")
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    /// Resolve a detail link, which may be absolute or relative to the root.
    fn detail_url(&self, link: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(link)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", link, e)))
    }

    async fn get_body(&self, url: Url) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "Fetching card page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))
    }
}

#[async_trait]
impl CardSourcePort for NetrunnerDbClient {
    async fn search(&self, query: &str) -> Result<String, FetchError> {
        let url = self.search_url(query)?;
        self.get_body(url).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<String, FetchError> {
        let url = self.detail_url(url)?;
        self.get_body(url).await
    }
}
