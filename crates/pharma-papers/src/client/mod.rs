//! PubMed E-utilities client.
//!
//! Provides an async HTTP client for:
//! - `esearch`: query -> ordered PMIDs
//! - `efetch`: PMIDs -> full article records
//!
//! Requests are issued one at a time and followed by a fixed delay to stay
//! under the NCBI rate limit (3 req/s without key, 10 req/s with key).
//! Nothing is retried or cached.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::Paper;
use crate::parser;

/// PubMed E-utilities client.
pub struct PubMedClient {
    /// HTTP client (connection pool).
    client: Client,

    /// Contact email (optional).
    email: Option<String>,

    /// API key (optional).
    api_key: Option<String>,

    /// E-utilities base URL.
    base_url: String,

    /// Delay awaited after every request.
    rate_limit_delay: Duration,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            email: config.email,
            api_key: config.api_key,
            base_url: config.base_url,
            rate_limit_delay: config.rate_limit_delay,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search PubMed and return matching PMIDs in relevance order.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, an
    /// undecodable response, or an error reported by E-utilities.
    pub async fn search_papers(&self, query: &str, max_results: usize) -> ClientResult<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        let params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("term".to_string(), query.to_string()),
            ("retmax".to_string(), max_results.to_string()),
            ("retmode".to_string(), "json".to_string()),
        ];

        let body = self.get(&url, params).await?;
        let response: ESearchResponse = serde_json::from_str(&body)?;

        if let Some(message) = response.error {
            return Err(ClientError::upstream(message));
        }
        let result = response
            .esearchresult
            .ok_or_else(|| ClientError::upstream("response has no esearchresult"))?;
        if let Some(message) = result.error {
            return Err(ClientError::upstream(message));
        }

        tracing::debug!(count = ?result.count, returned = result.idlist.len(), "esearch finished");
        Ok(result.idlist)
    }

    /// Fetch and normalize the records for the given PMIDs in one request.
    ///
    /// Articles that cannot be normalized are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, malformed
    /// XML, or an error reported by E-utilities.
    pub async fn fetch_paper_details(&self, pubmed_ids: &[String]) -> ClientResult<Vec<Paper>> {
        if pubmed_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/efetch.fcgi", self.base_url);
        let params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("id".to_string(), pubmed_ids.join(",")),
            ("retmode".to_string(), "xml".to_string()),
        ];

        let body = self.get(&url, params).await?;
        parser::parse_efetch(&body)
    }

    /// Make a GET request and return the body, then wait out the rate limit.
    async fn get(&self, url: &str, mut params: Vec<(String, String)>) -> ClientResult<String> {
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }

        tracing::debug!(url, "GET");
        let result = self.send(url, &params).await;

        tokio::time::sleep(self.rate_limit_delay).await;

        result
    }

    async fn send(&self, url: &str, params: &[(String, String)]) -> ClientResult<String> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), text));
        }

        Ok(response.text().await?)
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .finish_non_exhaustive()
    }
}

/// esearch JSON envelope.
#[derive(Debug, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: Option<ESearchResult>,

    /// Top-level error (e.g. invalid API key).
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    count: Option<String>,

    #[serde(default)]
    idlist: Vec<String>,

    #[serde(default, rename = "ERROR")]
    error: Option<String>,
}
