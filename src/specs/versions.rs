// src/specs/versions.rs
//! Scraping spec for the docs.python.org sidebar version list.
//!
//! Rows are `[Link, Version, Status]`. Labels that don't match the
//! `Python X.Y (Status)` pattern keep their full text as the version
//! and an empty status.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::{ALL_VERSIONS_MARK, SIDEBAR_CLASS};
use crate::core::html::{attr_value, locate, next_tag_ci, text};
use crate::error::ScrapeError;
use crate::report::DataSet;

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)").expect("valid regex")
    })
}

pub fn extract_versions(doc: &str) -> Result<DataSet, ScrapeError> {
    let sidebar = locate(doc, "div", &[("class", SIDEBAR_CLASS)])?;

    // The sidebar holds several <ul>s; the one we want mentions "All versions".
    let mut list = None;
    let mut pos = 0usize;
    while let Some(ul) = next_tag_ci(sidebar.inner, "ul", pos) {
        pos = ul.end;
        if text(&ul).contains(ALL_VERSIONS_MARK) {
            list = Some(ul);
            break;
        }
    }
    let list = match list {
        Some(ul) => ul,
        None => {
            loge!("tag not found: <ul> containing {ALL_VERSIONS_MARK:?}");
            return Err(ScrapeError::TagNotFound {
                tag: s!("ul"),
                filter: format!("containing {ALL_VERSIONS_MARK:?}"),
            });
        }
    };

    let mut rows = Vec::new();
    let mut a_pos = 0usize;
    while let Some(a) = next_tag_ci(list.inner, "a", a_pos) {
        a_pos = a.end;
        let link = s!(attr_value(a.opener, "href").unwrap_or(""));
        let label = text(&a);
        let (version, status) = match version_re().captures(&label) {
            Some(c) => (s!(&c["version"]), s!(&c["status"])),
            None => (label.clone(), s!()),
        };
        rows.push(vec![link, version, status]);
    }

    Ok(DataSet {
        headers: Some(vec![s!("Link"), s!("Version"), s!("Status")]),
        rows,
    })
}
