// tests/pipeline.rs
//
// End-to-end pep runs over a stub fetcher: partial-failure tolerance,
// fatal structure errors, idempotence.
//
use std::collections::HashMap;

use pep_scrape::core::net::Fetch;
use pep_scrape::error::ScrapeError;
use pep_scrape::reconcile::ExpectedStatuses;
use pep_scrape::report::DataSet;
use pep_scrape::scrape;
use url::Url;

const INDEX_URL: &str = "https://peps.python.org/";

struct MapFetcher(HashMap<String, String>);

impl MapFetcher {
    fn new(pages: &[(&str, String)]) -> Self {
        Self(
            pages
                .iter()
                .map(|(u, b)| (u.to_string(), b.clone()))
                .collect(),
        )
    }
}

impl Fetch for MapFetcher {
    fn get(&self, url: &Url) -> Option<String> {
        self.0.get(url.as_str()).cloned()
    }
}

fn index_page(rows: &str) -> String {
    format!(
        r#"<html><body><section id="pep-content">
<table class="pep-zero-table docutils align-default">{rows}</table>
</section></body></html>"#
    )
}

fn row(abbr: &str, href: &str) -> String {
    let abbr_cell = if abbr.is_empty() {
        String::new()
    } else {
        format!(r#"<abbr title="status">{abbr}</abbr>"#)
    };
    format!(r#"<tr><td>{abbr_cell}</td><td><a href="{href}">link</a></td></tr>"#)
}

fn detail_page(fields: &str) -> String {
    format!(
        r#"<html><body><section id="pep-content">
<dl class="rfc2822 field-list simple">{fields}</dl>
</section></body></html>"#
    )
}

fn status_field(value: &str) -> String {
    format!(r#"<dt>Status<span class="colon">:</span></dt><dd>{value}</dd>"#)
}

fn report_rows(ds: &DataSet) -> Vec<(String, String)> {
    ds.rows.iter().map(|r| (r[0].clone(), r[1].clone())).collect()
}

#[test]
fn single_final_pep_counts_once() {
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&row("PF", "pep-0008/"))),
        (
            "https://peps.python.org/pep-0008/",
            detail_page(&status_field("Final")),
        ),
    ]);
    let ds = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap();
    assert_eq!(
        ds.headers,
        Some(vec!["Status".to_string(), "Count".to_string()])
    );
    assert_eq!(
        report_rows(&ds),
        vec![
            ("Final".to_string(), "1".to_string()),
            ("Total".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn mismatched_status_is_still_counted_as_declared() {
    // Index says 'A' (Active/Accepted), page says Rejected.
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&row("IA", "pep-9999/"))),
        (
            "https://peps.python.org/pep-9999/",
            detail_page(&status_field("Rejected")),
        ),
    ]);
    let ds = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap();
    assert_eq!(
        report_rows(&ds),
        vec![
            ("Rejected".to_string(), "1".to_string()),
            ("Total".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn row_without_anchor_contributes_nothing() {
    let rows = format!("<tr><td>section header</td></tr>{}", row("PF", "pep-0008/"));
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&rows)),
        (
            "https://peps.python.org/pep-0008/",
            detail_page(&status_field("Final")),
        ),
    ]);
    let ds = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap();
    assert_eq!(report_rows(&ds).last().unwrap().1, "1");
}

#[test]
fn failed_detail_fetch_is_skipped_and_excluded_from_total() {
    // pep-0002 is absent from the fetcher: transport failure, no observation.
    let rows = format!("{}{}", row("PF", "pep-0001/"), row("PF", "pep-0002/"));
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&rows)),
        (
            "https://peps.python.org/pep-0001/",
            detail_page(&status_field("Final")),
        ),
    ]);
    let ds = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap();
    assert_eq!(
        report_rows(&ds),
        vec![
            ("Final".to_string(), "1".to_string()),
            ("Total".to_string(), "1".to_string()),
        ]
    );
}

#[test]
fn page_without_status_field_contributes_nothing() {
    let rows = format!("{}{}", row("PF", "pep-0001/"), row("", "pep-0002/"));
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&rows)),
        (
            "https://peps.python.org/pep-0001/",
            detail_page(&status_field("Final")),
        ),
        (
            "https://peps.python.org/pep-0002/",
            detail_page("<dt>Author<span class=\"colon\">:</span></dt><dd>Somebody</dd>"),
        ),
    ]);
    let ds = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap();
    assert_eq!(report_rows(&ds).last().unwrap().1, "1");
}

#[test]
fn missing_index_section_aborts_the_run() {
    let fetch = MapFetcher::new(&[(INDEX_URL, "<html><body>redesigned</body></html>".to_string())]);
    let err = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap_err();
    match err {
        ScrapeError::TagNotFound { tag, filter } => {
            assert_eq!(tag, "section");
            assert!(filter.contains("pep-content"));
        }
        other => panic!("expected TagNotFound, got {other:?}"),
    }
}

#[test]
fn malformed_detail_page_aborts_the_run() {
    // Policy: a structurally broken detail page stops the whole pass
    // rather than silently skewing the counts.
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&row("PF", "pep-0001/"))),
        (
            "https://peps.python.org/pep-0001/",
            "<html><body><section id=\"pep-content\"><p>no list</p></section></body></html>"
                .to_string(),
        ),
    ]);
    let err = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap_err();
    match err {
        ScrapeError::TagNotFound { tag, .. } => assert_eq!(tag, "dl"),
        other => panic!("expected TagNotFound, got {other:?}"),
    }
}

#[test]
fn unavailable_index_page_aborts_the_run() {
    let fetch = MapFetcher::new(&[]);
    let err = scrape::pep_report(&fetch, &ExpectedStatuses::default()).unwrap_err();
    assert!(matches!(err, ScrapeError::Http(_)));
}

#[test]
fn identical_responses_produce_identical_reports() {
    let rows = format!("{}{}", row("PF", "pep-0001/"), row("IA", "pep-0020/"));
    let fetch = MapFetcher::new(&[
        (INDEX_URL, index_page(&rows)),
        (
            "https://peps.python.org/pep-0001/",
            detail_page(&status_field("Final")),
        ),
        (
            "https://peps.python.org/pep-0020/",
            detail_page(&status_field("Active")),
        ),
    ]);
    let table = ExpectedStatuses::default();
    let first = scrape::pep_report(&fetch, &table).unwrap();
    let second = scrape::pep_report(&fetch, &table).unwrap();
    assert_eq!(first, second);
}
