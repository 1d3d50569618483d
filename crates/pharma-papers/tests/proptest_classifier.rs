//! Property-based tests for affiliation classification and row rendering.

use proptest::prelude::*;

use pharma_papers::classifier::{
    ACADEMIC_KEYWORDS, COMPANY_NAMES, INDUSTRY_KEYWORDS, classify, extract_company_name,
    is_non_academic,
};
use pharma_papers::models::{Author, FilteredPaper, Paper, PaperRow};
use pharma_papers::processor::filter_papers_with_company_authors;

/// Filler text that cannot trigger any rule: digits and spaces only.
fn neutral() -> impl Strategy<Value = String> {
    "[0-9 ]{0,12}"
}

/// Flip the case of random characters.
fn random_case(s: &str, mask: u64) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if mask >> (i % 64) & 1 == 1 { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    /// A known company name wins over any co-occurring academic or industry keyword.
    #[test]
    fn company_name_always_non_academic(
        company in proptest::sample::select(COMPANY_NAMES),
        academic in proptest::sample::select(ACADEMIC_KEYWORDS),
        mask in any::<u64>(),
        pre in neutral(),
        post in neutral(),
    ) {
        let affiliation = format!("{pre} {academic} {} {post}", random_case(company, mask));
        prop_assert!(is_non_academic(&affiliation), "{affiliation}");
    }

    /// An academic keyword beats an industry keyword when no company or suffix is present.
    #[test]
    fn academic_keyword_beats_industry_keyword(
        academic in proptest::sample::select(ACADEMIC_KEYWORDS),
        industry in proptest::sample::select(INDUSTRY_KEYWORDS),
        academic_first in any::<bool>(),
        pre in neutral(),
    ) {
        let affiliation = if academic_first {
            format!("{pre} {academic} of {industry}")
        } else {
            format!("{pre} {industry} {academic}")
        };
        prop_assume!(COMPANY_NAMES.iter().all(|c| !affiliation.contains(c)));
        prop_assert!(!is_non_academic(&affiliation), "{affiliation}");
    }

    /// An industry keyword alone marks a company.
    #[test]
    fn industry_keyword_alone_is_non_academic(
        industry in proptest::sample::select(INDUSTRY_KEYWORDS),
        mask in any::<u64>(),
        pre in neutral(),
        post in neutral(),
    ) {
        let affiliation = format!("{pre} {} {post}", random_case(industry, mask));
        prop_assume!(ACADEMIC_KEYWORDS.iter().all(|k| !affiliation.to_lowercase().contains(k)));
        prop_assert!(is_non_academic(&affiliation), "{affiliation}");
    }

    /// The boolean view always agrees with the detailed classification.
    #[test]
    fn is_non_academic_matches_classify(affiliation in ".{0,80}") {
        prop_assert_eq!(is_non_academic(&affiliation), classify(&affiliation).is_non_academic());
    }

    /// The company label is the trimmed text before the first separator.
    #[test]
    fn company_label_is_leading_segment(
        head in "[A-Za-z][A-Za-z &.-]{0,30}",
        sep in proptest::sample::select(vec![',', ';']),
        tail in "[A-Za-z ,;]{0,30}",
    ) {
        let label = extract_company_name(&format!("  {head}{sep}{tail}"));
        prop_assert_eq!(label, head.trim());
    }

    /// Joined list cells split back into the original list.
    #[test]
    fn joined_cells_round_trip(
        names in proptest::collection::vec("[A-Za-z][A-Za-z .'-]{0,20}", 1..6),
        // Labels can be empty when an affiliation starts with a separator.
        companies in proptest::collection::vec("([A-Za-z][A-Za-z .&-]{0,20})?", 1..4),
    ) {
        let paper = FilteredPaper {
            id: "1".to_string(),
            title: "t".to_string(),
            publication_date: "2024".to_string(),
            non_academic_authors: names.clone(),
            company_affiliations: companies.clone(),
            corresponding_author_email: None,
        };
        let row = PaperRow::from(&paper);
        prop_assert_eq!(PaperRow::split_list(&row.non_academic_authors), names);
        prop_assert_eq!(PaperRow::split_list(&row.company_affiliations), companies);
    }

    /// Papers whose authors are all academic never survive filtering.
    #[test]
    fn all_academic_papers_are_dropped(
        keywords in proptest::collection::vec(proptest::sample::select(ACADEMIC_KEYWORDS), 0..6),
    ) {
        let authors = keywords
            .iter()
            .enumerate()
            .map(|(i, k)| Author::new(format!("Author {i}"), format!("{k} of Example")))
            .collect();
        let paper = Paper {
            id: "42".to_string(),
            title: "t".to_string(),
            publication_date: "2024".to_string(),
            authors,
            corresponding_author_email: None,
        };
        prop_assert!(filter_papers_with_company_authors(&[paper]).is_empty());
    }
}
