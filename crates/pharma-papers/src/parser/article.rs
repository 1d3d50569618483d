//! Normalization of a single `<PubmedArticle>` into a [`Paper`].

use std::sync::LazyLock;

use regex::Regex;

use super::xml::{Element, non_blank};
use crate::error::{RecordError, RecordResult};
use crate::models::{Author, Paper, UNKNOWN_DATE, UNKNOWN_TITLE};

/// Date elements tried in order; the first one carrying a `Year` wins.
const DATE_FIELDS: &[&str] = &["PubDate", "ArticleDate", "DateCompleted"];

const MONTH_NAMES: [&str; 12] =
    ["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern is valid")
});

/// Build a [`Paper`] from one article element.
pub fn extract_paper(article: &Element) -> RecordResult<Paper> {
    let id = article.find("PMID").ok_or(RecordError::MissingId)?;
    let id = non_blank(id.text()).ok_or(RecordError::EmptyId)?;

    let title = article
        .find("ArticleTitle")
        .map(|t| collapse_whitespace(&t.text()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    Ok(Paper {
        id,
        title,
        publication_date: extract_publication_date(article),
        authors: extract_authors(article),
        corresponding_author_email: extract_corresponding_email(article),
    })
}

/// Normalized publication date, or [`UNKNOWN_DATE`].
///
/// Output is `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on which parts
/// the chosen date element carries.
#[must_use]
pub fn extract_publication_date(article: &Element) -> String {
    DATE_FIELDS
        .iter()
        .filter_map(|field| article.find(field))
        .find_map(format_date)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

fn format_date(date: &Element) -> Option<String> {
    let mut parts = vec![date.child_text("Year")?];
    if let Some(month) = date.child_text("Month") {
        parts.push(normalize_month(&month));
    }
    if let Some(day) = date.child_text("Day") {
        parts.push(zero_pad(&day));
    }
    Some(parts.join("-"))
}

/// `"3"` -> `"03"`, `"Mar"` -> `"03"`; anything else is kept as-is.
fn normalize_month(month: &str) -> String {
    let lower = month.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| lower.len() >= 3 && lower.starts_with(name))
        .map(|index| format!("{:02}", index + 1))
        .unwrap_or_else(|| zero_pad(month))
}

fn zero_pad(value: &str) -> String {
    format!("{value:0>2}")
}

/// Authors in document order. Entries without a `LastName` are skipped.
#[must_use]
pub fn extract_authors(article: &Element) -> Vec<Author> {
    article
        .find_all("Author")
        .into_iter()
        .filter_map(|author| {
            let last = author.child_text("LastName")?;
            let name = match author.child_text("ForeName") {
                Some(first) => format!("{first} {last}"),
                None => last,
            };
            let affiliation = affiliation_of(author).unwrap_or_default();
            let email = find_email(&affiliation);
            Some(Author { name, affiliation, email })
        })
        .collect()
}

/// First email-looking substring in any author affiliation, in author order.
///
/// Every `Author` element is scanned, including ones skipped by
/// [`extract_authors`] for lacking a last name.
#[must_use]
pub fn extract_corresponding_email(article: &Element) -> Option<String> {
    article
        .find_all("Author")
        .into_iter()
        .filter_map(affiliation_of)
        .find_map(|affiliation| find_email(&affiliation))
}

fn affiliation_of(author: &Element) -> Option<String> {
    non_blank(author.find("Affiliation")?.text())
}

fn find_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
