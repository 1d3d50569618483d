//! Record extraction from PubMed efetch XML.

mod article;
mod xml;

pub use article::{
    extract_authors, extract_corresponding_email, extract_paper, extract_publication_date,
};
pub use xml::{Element, MAX_DEPTH, XmlError, parse_document};

use crate::error::{ClientError, ClientResult};
use crate::models::Paper;

/// Parse an efetch response body into papers.
///
/// A malformed document fails the whole batch. A malformed article is
/// logged and skipped.
pub fn parse_efetch(body: &str) -> ClientResult<Vec<Paper>> {
    let root = parse_document(body)?;

    if let Some(message) = root.child_text("ERROR") {
        return Err(ClientError::upstream(message));
    }

    let articles = root.find_all("PubmedArticle");
    let total = articles.len();

    let papers: Vec<Paper> = articles
        .into_iter()
        .enumerate()
        .filter_map(|(index, article)| match extract_paper(article) {
            Ok(paper) => Some(paper),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping unparseable article");
                None
            }
        })
        .collect();

    tracing::debug!(total, parsed = papers.len(), "Parsed efetch response");
    Ok(papers)
}
