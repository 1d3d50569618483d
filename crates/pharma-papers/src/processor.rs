//! Filtering of papers down to those with company-affiliated authors.

use crate::classifier::{extract_company_name, is_non_academic};
use crate::client::PubMedClient;
use crate::error::ClientResult;
use crate::models::{FilteredPaper, Paper, PaperRow};

/// Keep papers with at least one non-academic author.
///
/// Output order follows input order. Author names are not deduplicated;
/// company labels are, by exact string equality.
#[must_use]
pub fn filter_papers_with_company_authors(papers: &[Paper]) -> Vec<FilteredPaper> {
    papers.iter().filter_map(filter_paper).collect()
}

/// Project one paper onto its non-academic authors, if it has any.
#[must_use]
pub fn filter_paper(paper: &Paper) -> Option<FilteredPaper> {
    let mut non_academic_authors = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();

    for author in paper.authors.iter().filter(|a| is_non_academic(&a.affiliation)) {
        non_academic_authors.push(author.name.clone());
        let company = extract_company_name(&author.affiliation);
        if !company_affiliations.contains(&company) {
            company_affiliations.push(company);
        }
    }

    if non_academic_authors.is_empty() {
        return None;
    }

    Some(FilteredPaper {
        id: paper.id.clone(),
        title: paper.title.clone(),
        publication_date: paper.publication_date.clone(),
        non_academic_authors,
        company_affiliations,
        corresponding_author_email: paper.corresponding_author_email.clone(),
    })
}

/// Render filtered papers as export rows.
#[must_use]
pub fn to_rows(papers: &[FilteredPaper]) -> Vec<PaperRow> {
    papers.iter().map(PaperRow::from).collect()
}

/// Outcome of one search-fetch-filter run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// PMIDs returned by the search.
    pub found: usize,
    /// Records successfully normalized.
    pub fetched: usize,
    /// Papers with at least one company author.
    pub papers: Vec<FilteredPaper>,
}

/// Search, fetch and filter in one pass.
///
/// # Errors
///
/// Returns the first API-layer error; nothing is kept from a failed run.
pub async fn fetch_filtered_papers(
    client: &PubMedClient,
    query: &str,
    max_results: usize,
) -> ClientResult<RunSummary> {
    tracing::info!(query, max_results, "Searching PubMed");
    let ids = client.search_papers(query, max_results).await?;
    tracing::info!(count = ids.len(), "Found papers");

    if ids.is_empty() {
        return Ok(RunSummary::default());
    }

    tracing::info!("Fetching paper details");
    let papers = client.fetch_paper_details(&ids).await?;
    tracing::info!(count = papers.len(), "Fetched paper details");

    let filtered = filter_papers_with_company_authors(&papers);
    tracing::info!(count = filtered.len(), "Papers with pharmaceutical/biotech company authors");

    Ok(RunSummary { found: ids.len(), fetched: papers.len(), papers: filtered })
}
