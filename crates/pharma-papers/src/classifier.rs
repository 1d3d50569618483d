//! Affiliation classification: company vs. academic.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. known company name (substring)
//! 2. corporate suffix (`Inc`, `Ltd.`, `Corporation`, ...)
//! 3. academic keyword
//! 4. pharma/biotech keyword
//! 5. otherwise academic
//!
//! Company names and suffixes override academic keywords, so
//! "Novartis Institute for BioMedical Research" is a company. Academic
//! keywords override industry keywords, so
//! "Department of Clinical Pharmacology, University of X" is academic.

use std::sync::LazyLock;

use regex::Regex;

/// Known pharmaceutical/biotech company names (lowercase).
pub const COMPANY_NAMES: &[&str] = &[
    "novartis",
    "pfizer",
    "roche",
    "astrazeneca",
    "gilead",
    "johnson & johnson",
    "lilly",
    "sanofi",
    "bayer",
    "abbvie",
    "bristol-myers",
    "amgen",
    "regeneron",
    "biogen",
    "merck",
    "takeda",
    "genentech",
    "boehringer",
    "vertex",
    "illumina",
    "novo nordisk",
    "servier",
];

/// Keywords marking an academic or research institution (lowercase).
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "school",
    "institute",
    "department",
    "faculty",
    "laboratory",
    "lab",
    "center",
    "centre",
    "hospital",
    "medical center",
    "research institute",
    "academy",
    "foundation",
];

/// Keywords marking pharmaceutical or biotech industry (lowercase).
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharmaceutical",
    "pharma",
    "biotech",
    "biotechnology",
    "biopharmaceutical",
    "drug",
    "therapeutics",
    "medicine",
    "clinical",
    "research and development",
    "r&d",
    "life sciences",
    "biopharma",
];

/// Corporate suffix patterns, matched against the lowercased affiliation.
const CORPORATE_SUFFIX_PATTERNS: &[&str] = &[
    r"\binc\.?\b",
    r"\bcorp\.?\b",
    r"\bltd\.?\b",
    r"\bllc\.?\b",
    r"\bco\.?\b",
    r"\bcompany\b",
    r"\bcorporation\b",
];

static CORPORATE_SUFFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CORPORATE_SUFFIX_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("corporate suffix pattern is valid"))
        .collect()
});

/// The rule that decided an affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Contains a known company name.
    KnownCompany(&'static str),
    /// Contains a corporate suffix such as `Inc.` or `Ltd`.
    CorporateSuffix,
    /// Contains an academic keyword.
    Academic(&'static str),
    /// Contains a pharma/biotech keyword.
    IndustryKeyword(&'static str),
    /// Nothing matched.
    Unrecognized,
}

impl Classification {
    /// Whether this classification marks a company affiliation.
    #[must_use]
    pub const fn is_non_academic(self) -> bool {
        matches!(self, Self::KnownCompany(_) | Self::CorporateSuffix | Self::IndustryKeyword(_))
    }
}

/// Classify an affiliation by the first matching rule.
#[must_use]
pub fn classify(affiliation: &str) -> Classification {
    let lower = affiliation.to_lowercase();

    if let Some(company) = COMPANY_NAMES.iter().copied().find(|c| lower.contains(*c)) {
        return Classification::KnownCompany(company);
    }

    if CORPORATE_SUFFIXES.iter().any(|re| re.is_match(&lower)) {
        return Classification::CorporateSuffix;
    }

    if let Some(keyword) = ACADEMIC_KEYWORDS.iter().copied().find(|k| lower.contains(*k)) {
        return Classification::Academic(keyword);
    }

    if let Some(keyword) = INDUSTRY_KEYWORDS.iter().copied().find(|k| lower.contains(*k)) {
        return Classification::IndustryKeyword(keyword);
    }

    Classification::Unrecognized
}

/// Check if an affiliation belongs to a company rather than an academic institution.
#[must_use]
pub fn is_non_academic(affiliation: &str) -> bool {
    let classification = classify(affiliation);
    tracing::debug!(affiliation, ?classification, "Classified affiliation");
    classification.is_non_academic()
}

/// Short company label: the trimmed text before the first `,` or `;`.
///
/// This is a heuristic; the segment is not checked to be a company name.
#[must_use]
pub fn extract_company_name(affiliation: &str) -> String {
    affiliation.split([',', ';']).next().unwrap_or_default().trim().to_string()
}
