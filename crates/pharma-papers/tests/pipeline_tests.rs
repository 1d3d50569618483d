//! End-to-end search -> fetch -> filter -> export tests.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pharma_papers::client::PubMedClient;
use pharma_papers::config::Config;
use pharma_papers::formatters::{NO_RESULTS_MESSAGE, format_table, render_csv, write_csv};
use pharma_papers::models::PaperRow;
use pharma_papers::processor::{fetch_filtered_papers, to_rows};

const EFETCH_SAMPLE: &str = include_str!("fixtures/efetch_sample.xml");

async fn mount_pubmed(mock_server: &MockServer, ids: &[&str], efetch_body: &str) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "esearchresult": {"count": ids.len().to_string(), "idlist": ids}
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", ids.join(",")))
        .respond_with(ResponseTemplate::new(200).set_body_string(efetch_body))
        .mount(mock_server)
        .await;
}

fn client_for(mock_server: &MockServer) -> PubMedClient {
    PubMedClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

#[tokio::test]
async fn test_pipeline_keeps_only_papers_with_company_authors() {
    let mock_server = MockServer::start().await;
    mount_pubmed(&mock_server, &["38000001", "38000002", "38000003", "38000004"], EFETCH_SAMPLE)
        .await;

    let run = fetch_filtered_papers(&client_for(&mock_server), "mrna", 100).await.unwrap();

    assert_eq!(run.found, 4);
    assert_eq!(run.fetched, 3);

    let ids: Vec<_> = run.papers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["38000001", "38000004"]);

    let moderna = &run.papers[0];
    assert_eq!(moderna.non_academic_authors, vec!["Chidi Okafor"]);
    assert_eq!(moderna.company_affiliations, vec!["Moderna Inc"]);
    assert_eq!(moderna.corresponding_author_email.as_deref(), Some("chidi.okafor@modernatx.com"));

    let novartis = &run.papers[1];
    assert_eq!(novartis.non_academic_authors, vec!["Jonas Weber", "Mei Chen", "Jonas Weber"]);
    assert_eq!(
        novartis.company_affiliations,
        vec!["Novartis Institute for BioMedical Research", "XYZ Biotech Solutions"]
    );
    assert_eq!(novartis.publication_date, "Unknown Date");
    assert!(novartis.corresponding_author_email.is_none());
}

#[tokio::test]
async fn test_pipeline_with_no_search_hits_skips_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"esearchresult": {"idlist": []}})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let run = fetch_filtered_papers(&client_for(&mock_server), "zzzz", 10).await.unwrap();
    assert_eq!(run.found, 0);
    assert!(run.papers.is_empty());
}

#[tokio::test]
async fn test_pipeline_fetch_failure_aborts_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"esearchresult": {"idlist": ["1"]}})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let err = fetch_filtered_papers(&client_for(&mock_server), "x", 10).await.unwrap_err();
    assert_eq!(err.status_code(), Some(502));
}

#[tokio::test]
async fn test_all_academic_results_render_message() {
    let mock_server = MockServer::start().await;
    let academic_only = r#"<PubmedArticleSet>
  <PubmedArticle><MedlineCitation><PMID>7</PMID><Article><AuthorList>
    <Author><LastName>Kim</LastName><AffiliationInfo><Affiliation>Seoul National University Hospital</Affiliation></AffiliationInfo></Author>
  </AuthorList></Article></MedlineCitation></PubmedArticle>
</PubmedArticleSet>"#;
    mount_pubmed(&mock_server, &["7"], academic_only).await;

    let run = fetch_filtered_papers(&client_for(&mock_server), "x", 10).await.unwrap();
    assert_eq!(run.fetched, 1);
    assert!(run.papers.is_empty());
    assert_eq!(format_table(&to_rows(&run.papers)), NO_RESULTS_MESSAGE);
}

#[tokio::test]
async fn test_csv_file_is_overwritten_and_round_trips_lists() {
    let mock_server = MockServer::start().await;
    mount_pubmed(&mock_server, &["38000001", "38000002", "38000003", "38000004"], EFETCH_SAMPLE)
        .await;

    let run = fetch_filtered_papers(&client_for(&mock_server), "mrna", 100).await.unwrap();
    let rows = to_rows(&run.papers);

    let path = std::env::temp_dir()
        .join(format!("pharma-papers-pipeline-{}.csv", std::process::id()));
    std::fs::write(&path, "stale content that must disappear").unwrap();

    write_csv(&path, &rows).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(written, render_csv(&rows));
    assert!(written.starts_with('\u{FEFF}'));
    assert!(!written.contains("stale content"));
    assert_eq!(written.lines().count(), 3);

    assert_eq!(
        PaperRow::split_list(&rows[1].non_academic_authors),
        run.papers[1].non_academic_authors
    );
    assert!(written.contains("Jonas Weber | Mei Chen | Jonas Weber"));
}
