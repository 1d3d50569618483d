//! Tabular export row.

use serde::{Deserialize, Serialize};

use super::FilteredPaper;

/// Separator used to join list-valued cells.
pub const LIST_SEPARATOR: &str = " | ";

/// One export row, every column already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRow {
    /// PubMed ID.
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Article title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Normalized publication date.
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Non-academic author names joined by [`LIST_SEPARATOR`].
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Company labels joined by [`LIST_SEPARATOR`].
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    /// Email, or empty.
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRow {
    /// Column headers, in output order.
    pub const HEADERS: [&'static str; 6] = [
        "PubmedID",
        "Title",
        "Publication Date",
        "Non-academic Author(s)",
        "Company Affiliation(s)",
        "Corresponding Author Email",
    ];

    /// Cell values, in the same order as [`Self::HEADERS`].
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_author_email.as_str(),
        ]
    }

    /// Split a joined list cell back into its elements.
    ///
    /// Exact inverse of the join for elements without [`LIST_SEPARATOR`].
    /// Filtered papers never carry empty lists, so an empty cell is one
    /// empty element (a company label cut from ", Pfizer Inc").
    #[must_use]
    pub fn split_list(cell: &str) -> Vec<String> {
        cell.split(LIST_SEPARATOR).map(str::to_string).collect()
    }
}

impl From<&FilteredPaper> for PaperRow {
    fn from(paper: &FilteredPaper) -> Self {
        Self {
            pubmed_id: paper.id.clone(),
            title: paper.title.clone(),
            publication_date: paper.publication_date.clone(),
            non_academic_authors: paper.non_academic_authors.join(LIST_SEPARATOR),
            company_affiliations: paper.company_affiliations.join(LIST_SEPARATOR),
            corresponding_author_email: paper.corresponding_author_email.clone().unwrap_or_default(),
        }
    }
}
