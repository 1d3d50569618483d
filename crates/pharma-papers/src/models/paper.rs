//! Paper and author models normalized from PubMed records.

use serde::{Deserialize, Serialize};

/// Title used when a record has no `ArticleTitle`.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Publication date used when no candidate date field carries a year.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// An author with their affiliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name ("ForeName LastName", or just the last name).
    pub name: String,

    /// Free-text affiliation, empty if the record had none.
    #[serde(default)]
    pub affiliation: String,

    /// Email address, if known.
    #[serde(default)]
    pub email: Option<String>,
}

impl Author {
    /// Create an author without an email.
    #[must_use]
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self { name: name.into(), affiliation: affiliation.into(), email: None }
    }
}

/// A paper normalized from one PubMed article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed ID. Never empty.
    pub id: String,

    /// Article title.
    pub title: String,

    /// `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or [`UNKNOWN_DATE`].
    pub publication_date: String,

    /// Authors in document order.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// First email found in any author affiliation.
    #[serde(default)]
    pub corresponding_author_email: Option<String>,
}

/// Export view of a paper restricted to its non-academic authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredPaper {
    /// PubMed ID.
    pub id: String,

    /// Article title.
    pub title: String,

    /// Normalized publication date.
    pub publication_date: String,

    /// Names of non-academic authors, in author order. Not deduplicated.
    pub non_academic_authors: Vec<String>,

    /// Distinct company labels, in first-seen order.
    pub company_affiliations: Vec<String>,

    /// Corresponding author email carried over from the paper.
    pub corresponding_author_email: Option<String>,
}
