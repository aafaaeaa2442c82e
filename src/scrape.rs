// src/scrape.rs
//! Crawl drivers: fetch pages, apply the page specs, assemble datasets.
//!
//! Sequential by construction: one request in flight, each detail page
//! reconciled before the next index entry. Transport failures skip the
//! affected page; structural failures abort the run, since partial
//! counts over changed markup would be misleading.

use crate::config::consts;
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::reconcile::{self, ExpectedStatuses};
use crate::report::{DataSet, StatusCounts};
use crate::specs::{pep_detail, pep_index, versions, whatsnew};

/// Crawl the PEP index, reconcile each PEP's declared status against
/// its index code, and count declared statuses in first-seen order.
pub fn pep_report(
    fetch: &dyn Fetch,
    expected: &ExpectedStatuses,
) -> Result<DataSet, ScrapeError> {
    let index_url = consts::pep_index_url();
    let doc = fetch
        .get(index_url)
        .ok_or_else(|| ScrapeError::Http(format!("index page unavailable: {index_url}")))?;

    let entries = pep_index::crawl_index(&doc, index_url)?;
    logf!("index rows with links: {}", entries.len());

    let mut counts = StatusCounts::new();
    for entry in &entries {
        let page = match fetch.get(&entry.detail_link) {
            Some(p) => p,
            None => continue, // logged by the fetcher; no observation
        };
        let declared = match pep_detail::extract_status(&page)? {
            Some(d) => d,
            None => {
                logw!("no {:?} field on {}", consts::STATUS_LABEL, entry.detail_link);
                continue;
            }
        };
        reconcile::reconcile(expected, entry, &declared);
        counts.add(&declared);
    }
    Ok(counts.into_dataset())
}

/// List Python versions and their statuses from the docs sidebar.
pub fn latest_versions(fetch: &dyn Fetch) -> Result<DataSet, ScrapeError> {
    let url = consts::main_doc_url();
    let doc = fetch
        .get(url)
        .ok_or_else(|| ScrapeError::Http(format!("docs page unavailable: {url}")))?;
    versions::extract_versions(&doc)
}

/// Collect link, title and editor line for every "What's New" release
/// page. Release pages that fail to fetch are skipped.
pub fn whats_new(fetch: &dyn Fetch) -> Result<DataSet, ScrapeError> {
    let base = consts::whats_new_url();
    let doc = fetch
        .get(base)
        .ok_or_else(|| ScrapeError::Http(format!("what's new index unavailable: {base}")))?;

    let links = whatsnew::release_links(&doc, base)?;
    logf!("what's new releases: {}", links.len());

    let mut rows = Vec::new();
    for link in links {
        let page = match fetch.get(&link) {
            Some(p) => p,
            None => continue,
        };
        let (title, editors) = whatsnew::page_summary(&page)?;
        rows.push(vec![link.to_string(), title, editors]);
    }
    Ok(DataSet {
        headers: Some(vec![s!("Link"), s!("Title"), s!("Editor, Author")]),
        rows,
    })
}
