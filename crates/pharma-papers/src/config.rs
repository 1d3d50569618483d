//! Configuration for the PubMed E-utilities client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for NCBI E-utilities.
    pub const BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Database queried by every request.
    pub const DATABASE: &str = "pubmed";

    /// Request timeout. Large efetch batches can take a while.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay after each request without API key (NCBI allows 3 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(340);

    /// Delay after each request with API key (NCBI allows 10 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(100);

    /// Default number of PMIDs requested from esearch.
    pub const DEFAULT_MAX_RESULTS: usize = 100;
}

/// Client configuration.
#[derive(Clone)]
pub struct Config {
    /// Contact email sent with each request (NCBI asks for one).
    pub email: Option<String>,

    /// NCBI API key (optional, raises the rate limit).
    pub api_key: Option<String>,

    /// Base URL for E-utilities (for testing with mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Fixed delay awaited after every request.
    pub rate_limit_delay: Duration,
}

impl Config {
    /// Create a new configuration.
    ///
    /// The post-request delay depends on API key presence:
    /// - Without key: 340ms (3 req/s)
    /// - With key: 100ms (10 req/s)
    #[must_use]
    pub fn new(email: Option<String>, api_key: Option<String>) -> Self {
        let rate_limit_delay = if api_key.is_some() {
            api::RATE_LIMIT_DELAY_WITH_KEY
        } else {
            api::RATE_LIMIT_DELAY
        };

        Self {
            email,
            api_key,
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            email: None,
            api_key: None,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
        }
    }

    /// Create configuration from `NCBI_EMAIL` and `NCBI_API_KEY`.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self::new(read("NCBI_EMAIL"), read("NCBI_API_KEY"))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("email", &self.email)
            .field("has_api_key", &self.has_api_key())
            .field("base_url", &self.base_url)
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}
