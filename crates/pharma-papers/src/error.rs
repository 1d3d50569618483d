//! Error types for the paper fetcher.
//!
//! Two tiers: [`ClientError`] aborts the whole run, [`RecordError`] only drops
//! the one article it was raised for.

/// Errors from the E-utilities client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// esearch JSON could not be decoded
    #[error("Failed to parse search response: {0}")]
    SearchParse(#[from] serde_json::Error),

    /// efetch XML could not be decoded
    #[error("Failed to parse fetch response: {0}")]
    FetchParse(#[from] crate::parser::XmlError),

    /// E-utilities answered 200 but reported an error in the payload
    #[error("PubMed reported an error: {0}")]
    Upstream(String),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create an upstream error.
    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// HTTP status code, if this error came from a non-success response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while normalizing a single article record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No `PMID` element in the record
    #[error("article has no PMID")]
    MissingId,

    /// `PMID` element present but empty
    #[error("article has an empty PMID")]
    EmptyId,
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for record extraction.
pub type RecordResult<T> = Result<T, RecordError>;
